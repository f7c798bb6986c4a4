use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{helpers::serialize_decimal_as_number, model::RateEntry};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageRateResponse {
    pub maturity_period: u32,
    #[serde(serialize_with = "serialize_decimal_as_number")]
    pub interest_rate: BigDecimal,
    pub last_update: DateTime<Utc>,
}

impl From<&RateEntry> for MortgageRateResponse {
    fn from(entry: &RateEntry) -> Self {
        MortgageRateResponse {
            maturity_period: entry.maturity_period,
            interest_rate: entry.annual_interest_rate.to_owned(),
            last_update: entry.last_update,
        }
    }
}
