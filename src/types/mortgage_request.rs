use bigdecimal::{BigDecimal, Zero};
use serde::Deserialize;
use serde_json::Number;

use crate::{error::Error, helpers::decimal_from_number, model::MortgageApplication};

/// Body of `POST /api/mortgage-check`. Every field is optional here so that
/// a missing or null value surfaces as a validation error instead of a
/// deserializer failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageRequest {
    pub income: Option<Number>,
    pub maturity_period: Option<i64>,
    pub loan_value: Option<Number>,
    pub home_value: Option<Number>,
}

impl MortgageRequest {
    pub fn validate(&self) -> Result<MortgageApplication, Error> {
        let income = positive_amount("income", &self.income)?;
        let maturity_period = self.maturity_period()?;
        let loan_value = positive_amount("loanValue", &self.loan_value)?;
        let home_value = positive_amount("homeValue", &self.home_value)?;

        Ok(MortgageApplication {
            income,
            maturity_period,
            loan_value,
            home_value,
        })
    }

    fn maturity_period(&self) -> Result<u32, Error> {
        let value = self
            .maturity_period
            .ok_or_else(|| Error::MissingField(String::from("maturityPeriod")))?;

        if value <= 0 {
            return Err(Error::InvalidField(String::from(
                "maturityPeriod must be positive",
            )));
        }

        u32::try_from(value).map_err(|_| {
            Error::InvalidField(format!("maturityPeriod out of range: {}", value))
        })
    }
}

fn positive_amount(
    field: &str,
    value: &Option<Number>,
) -> Result<BigDecimal, Error> {
    let number = value
        .as_ref()
        .ok_or_else(|| Error::MissingField(field.to_owned()))?;
    let amount = decimal_from_number(number)?;

    if amount <= BigDecimal::zero() {
        return Err(Error::InvalidField(format!("{} must be positive", field)));
    }

    Ok(amount)
}
