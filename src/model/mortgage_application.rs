use bigdecimal::BigDecimal;

/// A structurally valid eligibility request: every amount is strictly
/// positive and the maturity period is at least one year.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageApplication {
    pub income: BigDecimal,
    pub maturity_period: u32,
    pub loan_value: BigDecimal,
    pub home_value: BigDecimal,
}
