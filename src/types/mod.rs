pub use self::{
    mortgage_check_response::MortgageCheckResponse,
    mortgage_rate_response::MortgageRateResponse,
    mortgage_request::MortgageRequest,
};

mod mortgage_check_response;
mod mortgage_rate_response;
mod mortgage_request;
