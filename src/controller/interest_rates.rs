use actix_web::{get, web, Responder, Result};

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::MortgageRateResponse,
};

#[get("/interest-rates")]
pub async fn index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let items: Vec<MortgageRateResponse> = state
        .calculator
        .list_rates()
        .iter()
        .map(MortgageRateResponse::from)
        .collect();

    Ok(web::Json(items))
}
