use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct MortgageDecision {
    pub feasible: bool,
    pub monthly_costs: BigDecimal,
}
