//! Domain models
//!
//! Validated values the calculator works with. Wire formats live in `types`.

mod mortgage_application;
mod mortgage_decision;
mod rate_entry;

pub use mortgage_application::MortgageApplication;
pub use mortgage_decision::MortgageDecision;
pub use rate_entry::RateEntry;
