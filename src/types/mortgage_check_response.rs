use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::{helpers::serialize_decimal_as_number, model::MortgageDecision};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCheckResponse {
    pub feasible: bool,
    #[serde(serialize_with = "serialize_decimal_as_number")]
    pub monthly_costs: BigDecimal,
}

impl From<MortgageDecision> for MortgageCheckResponse {
    fn from(decision: MortgageDecision) -> Self {
        MortgageCheckResponse {
            feasible: decision.feasible,
            monthly_costs: decision.monthly_costs,
        }
    }
}
