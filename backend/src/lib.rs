pub mod config;
pub mod database;
pub mod error;
pub mod services;
pub mod state;

use actix_web::web;
use error::ApiError;

/// Maximum accepted JSON body size.
const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// JSON extractor settings. Malformed or schema-violating bodies are
/// reported as validation failures with the `{error}` body every other
/// failure uses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}
