use std::{collections::HashSet, str::FromStr};

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::{error::Error, model::RateEntry};

const RATES_LAST_UPDATE: &str = "2025-05-22T00:00:00Z";

/// (maturity period in years, annual interest rate)
const PUBLISHED_RATES: [(u32, &str); 10] = [
    (1, "0.0366"),
    (2, "0.0359"),
    (3, "0.0345"),
    (5, "0.0345"),
    (6, "0.0367"),
    (7, "0.0368"),
    (10, "0.0375"),
    (12, "0.0411"),
    (15, "0.0414"),
    (20, "0.0428"),
];

/// Read-only set of published mortgage rates, built once at startup and
/// shared between workers behind an `Arc`.
#[derive(Debug)]
pub struct RateCatalog {
    entries: Vec<RateEntry>,
}

impl RateCatalog {
    pub fn new(entries: Vec<RateEntry>) -> Result<RateCatalog, Error> {
        let mut periods = HashSet::with_capacity(entries.len());

        for entry in &entries {
            if !periods.insert(entry.maturity_period) {
                return Err(Error::DuplicateMaturityPeriod(
                    entry.maturity_period,
                ));
            }
        }

        Ok(RateCatalog { entries })
    }

    /// Builds the catalog of published rates, all stamped with the same
    /// last update.
    pub fn initialize() -> Result<RateCatalog, Error> {
        info!("Initializing mortgage rates data...");

        let last_update = Self::last_update()?;
        let mut entries = Vec::with_capacity(PUBLISHED_RATES.len());

        for (maturity_period, rate) in PUBLISHED_RATES {
            let annual_interest_rate = BigDecimal::from_str(rate)?;
            entries.push(RateEntry::new(
                maturity_period,
                annual_interest_rate,
                last_update,
            ));
        }

        let catalog = Self::new(entries)?;
        info!(
            "Successfully initialized {} mortgage rates",
            catalog.entries.len()
        );

        Ok(catalog)
    }

    pub fn list_all(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn find_by_maturity(&self, maturity_period: u32) -> Option<&RateEntry> {
        self.entries
            .iter()
            .find(|entry| entry.maturity_period == maturity_period)
    }

    fn last_update() -> Result<DateTime<Utc>, Error> {
        let last_update = DateTime::parse_from_rfc3339(RATES_LAST_UPDATE)?;
        Ok(last_update.with_timezone(&Utc))
    }
}
