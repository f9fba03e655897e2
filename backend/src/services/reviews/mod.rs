//! # Review Service
//!
//! Moderation routes under `/api/reviews`. The public per-app routes
//! (`GET`/`POST /api/apps/{id}/reviews`) live in the apps scope and are
//! served by [`list::for_app`] and [`submit::process`].

mod delete;
pub(crate) mod list;
mod moderate;
pub(crate) mod submit;

use actix_web::web::{delete, get, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/reviews";

/// Header through which a caller presents the token issued with its own
/// review submission.
pub const USER_TOKEN_HEADER: &str = "x-user-id";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::all))
        .route("/{id}", put().to(moderate::process))
        .route("/{id}", delete().to(delete::process))
}
