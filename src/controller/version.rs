use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::error::Error;

#[get("/version")]
pub async fn index() -> Result<impl Responder, Error> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    Ok(web::Json(Response { version: VERSION }))
}

#[derive(Debug, Serialize)]
pub struct Response<'a> {
    pub version: &'a str,
}
