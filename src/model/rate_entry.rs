use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// One published mortgage product.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub maturity_period: u32,
    pub annual_interest_rate: BigDecimal,
    pub last_update: DateTime<Utc>,
}

impl RateEntry {
    pub fn new(
        maturity_period: u32,
        annual_interest_rate: BigDecimal,
        last_update: DateTime<Utc>,
    ) -> RateEntry {
        RateEntry {
            maturity_period,
            annual_interest_rate,
            last_update,
        }
    }
}
