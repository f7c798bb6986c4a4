use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use tracing::{debug, info};

use crate::{
    catalog::RateCatalog,
    error::Error,
    helpers::{decimal_from_f64, decimal_to_f64, round_half_even},
    model::{MortgageApplication, MortgageDecision, RateEntry},
};

const ALLOWED_INCOME_MULTIPLIER: u32 = 4;
const STANDARD_MORTGAGE_PERIOD_YEARS: i32 = 30;
const MONTHS_PER_YEAR: i32 = 12;
const MONTHLY_RATE_SCALE: i64 = 10;
const MONTHLY_COSTS_SCALE: i64 = 2;

/// Eligibility rules and payment pricing over an injected rate catalog.
#[derive(Debug, Clone)]
pub struct MortgageCalculator {
    catalog: Arc<RateCatalog>,
}

impl MortgageCalculator {
    pub fn new(catalog: Arc<RateCatalog>) -> MortgageCalculator {
        MortgageCalculator { catalog }
    }

    pub fn list_rates(&self) -> &[RateEntry] {
        info!("Getting all mortgage rates");
        self.catalog.list_all()
    }

    /// Checks the affordability rules in order (income first, then
    /// collateral) and prices the loan over a fixed 30 year horizon. The
    /// maturity period only selects the rate.
    pub fn evaluate(
        &self,
        application: &MortgageApplication,
    ) -> Result<MortgageDecision, Error> {
        debug!(
            "Checking mortgage for income: {}, maturity_period: {}, loan_value: {}, home_value: {}",
            application.income,
            application.maturity_period,
            application.loan_value,
            application.home_value
        );

        Self::check_rules(application)?;
        let monthly_costs = self.monthly_costs(
            application.maturity_period,
            &application.loan_value,
        )?;

        Ok(MortgageDecision {
            feasible: true,
            monthly_costs,
        })
    }

    fn check_rules(application: &MortgageApplication) -> Result<(), Error> {
        let max_loan =
            &application.income * BigDecimal::from(ALLOWED_INCOME_MULTIPLIER);

        if application.loan_value > max_loan {
            return Err(Error::LowIncomeForLoan);
        }

        if application.loan_value > application.home_value {
            return Err(Error::LoanExceedsHomeValue);
        }

        Ok(())
    }

    fn monthly_costs(
        &self,
        maturity_period: u32,
        loan_value: &BigDecimal,
    ) -> Result<BigDecimal, Error> {
        info!("Calculating monthly cost...");

        let monthly_rate = self.monthly_rate(maturity_period)?;
        let total_months = STANDARD_MORTGAGE_PERIOD_YEARS * MONTHS_PER_YEAR;
        let loan = decimal_to_f64(loan_value)?;

        let payment = if monthly_rate == 0.0 {
            loan / f64::from(total_months)
        } else {
            let growth = (1.0 + monthly_rate).powf(f64::from(total_months));
            loan * monthly_rate * growth / (growth - 1.0)
        };

        let payment = decimal_from_f64(payment)?;
        Ok(round_half_even(&payment, MONTHLY_COSTS_SCALE))
    }

    fn monthly_rate(&self, maturity_period: u32) -> Result<f64, Error> {
        let entry = self
            .catalog
            .find_by_maturity(maturity_period)
            .ok_or(Error::MaturityPeriodNotFound(maturity_period))?;

        if entry.annual_interest_rate.is_zero() {
            return Ok(0.0);
        }

        let rate = &entry.annual_interest_rate
            / BigDecimal::from(MONTHS_PER_YEAR);
        decimal_to_f64(&round_half_even(&rate, MONTHLY_RATE_SCALE))
    }
}
