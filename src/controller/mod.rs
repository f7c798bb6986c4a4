//! API controllers, mounted under the `/api` scope.

pub mod docs;
pub mod interest_rates;
pub mod mortgage_check;
pub mod version;
