//! # HTTP Services
//!
//! Route scopes of the API and the embedded frontend pages:
//! - `auth`: the shared admin password check.
//! - `apps`: the app catalog, its rating snapshot and its per-app reviews.
//! - `reviews`: the moderation endpoints.
//! - `pages`: the embedded frontend and admin entry points.

pub mod apps;
pub mod auth;
pub mod guard;
pub mod pages;
pub mod reviews;

use crate::database::Database;
use crate::error::{ApiError, StoreError};
use actix_web::web;

/// Registers every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::configure_routes())
        .service(apps::configure_routes())
        .service(reviews::configure_routes())
        .configure(pages::configure_routes);
}

/// Runs a store operation on the blocking thread pool.
pub(crate) async fn with_db<F, T>(db: &Database, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let db = db.clone();
    let result = web::block(move || op(&db)).await??;
    Ok(result)
}
