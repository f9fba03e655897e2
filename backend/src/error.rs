//! Error taxonomy shared by the store and the HTTP handlers.
//!
//! Every failure leaves a handler as an [`ApiError`], which renders itself as
//! a `{"error": "<message>"}` JSON body. Validation problems are reported as
//! `500 Internal Server Error`, the same status as infrastructure failures;
//! only missing records (`404`) and a failed admin check (`401`) get their
//! own status codes.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed stored document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::Store(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store(_) | ApiError::Blocking(_) => log::error!("{}", self),
            _ => log::debug!("request failed: {}", self),
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Parses a path id, rejecting anything that is not a UUID.
///
/// The returned string is the canonical lowercase hyphenated form, which is
/// the form ids are stored in.
pub fn parse_id(raw: &str) -> Result<String, ApiError> {
    uuid::Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::Validation(format!("Invalid id \"{}\"", raw)))
}
