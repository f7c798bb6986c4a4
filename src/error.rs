use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use bigdecimal::ParseBigDecimalError as BIG_DECIMAL_ERROR;
use chrono::ParseError as DATE_TIME_PARSE_ERROR;
use std::{env::VarError, io::Error as IO_ERROR, num::ParseIntError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info};
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Low income for this loan!")]
    LowIncomeForLoan,

    #[error("Loan higher than house value!")]
    LoanExceedsHomeValue,

    #[error("Maturity period not found!")]
    MaturityPeriodNotFound(u32),

    #[error("Field is required: {0}")]
    MissingField(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),

    #[error("Duplicate maturity period: {0}")]
    DuplicateMaturityPeriod(u32),

    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("{0}")]
    BigDecimalError(#[from] BIG_DECIMAL_ERROR),

    #[error("Decode datetime: {0}")]
    DecodeDateTimeError(#[from] DATE_TIME_PARSE_ERROR),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),
}

impl Error {
    /// Rule violations and lookups that answer with a plain text message.
    fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::LowIncomeForLoan
                | Error::LoanExceedsHomeValue
                | Error::MaturityPeriodNotFound(_)
        )
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request - rule violations and malformed input
            Error::LowIncomeForLoan
            | Error::LoanExceedsHomeValue
            | Error::MissingField(_)
            | Error::InvalidField(_)
            | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found - no rate for the requested period
            Error::MaturityPeriodNotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error - everything else
            Error::ArithmeticError(_)
            | Error::DuplicateMaturityPeriod(_)
            | Error::Io(_)
            | Error::INT(_)
            | Error::VAR(_)
            | Error::BigDecimalError(_)
            | Error::DecodeDateTimeError(_)
            | Error::TokioJoinError(_)
            | Error::ConfigurationError(_)
            | Error::SetGlobalDefaultError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if self.is_domain() {
            info!("Mortgage check rejected: {}", self);
            return HttpResponse::build(status).body(self.to_string());
        }

        if status.is_server_error() {
            error!("{}", self);
        }

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "message": self.to_string(),
            "status": status.as_u16(),
        });
        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_text(err: &Error) -> String {
        let bytes = err.error_response().into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_domain_errors_map_to_status_and_plain_message() {
        assert_eq!(Error::LowIncomeForLoan.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(&Error::LowIncomeForLoan), "Low income for this loan!");

        assert_eq!(
            Error::LoanExceedsHomeValue.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            body_text(&Error::LoanExceedsHomeValue),
            "Loan higher than house value!"
        );

        let not_found = Error::MaturityPeriodNotFound(26);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(&not_found), "Maturity period not found!");
    }

    #[test]
    fn test_structural_errors_use_json_body() {
        let err = Error::MissingField(String::from("income"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value =
            serde_json::from_str(&body_text(&err)).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "Field is required: income");
    }

    #[test]
    fn test_internal_errors_are_500() {
        let err = Error::ArithmeticError(String::from("payment is NaN"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: Error = chrono::DateTime::parse_from_rfc3339("2025-05-22")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::DecodeDateTimeError(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
