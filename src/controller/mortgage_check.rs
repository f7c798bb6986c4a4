use actix_web::{post, web, HttpResponse, Result};

use crate::{
    configuration::{AppState, State},
    error::Error,
    types::{MortgageCheckResponse, MortgageRequest},
};

#[post("/mortgage-check")]
pub async fn index(
    state: web::Data<AppState<State>>,
    data: web::Json<MortgageRequest>,
) -> Result<HttpResponse, Error> {
    let application = data.validate()?;
    let decision = state.calculator.evaluate(&application)?;

    Ok(HttpResponse::Created().json(MortgageCheckResponse::from(decision)))
}
