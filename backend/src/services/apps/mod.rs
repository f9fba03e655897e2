//! # App Catalog Service
//!
//! Routes under `/api/apps`: listing, lookup, search, creation, partial
//! update and deletion of apps, the rating snapshot endpoint, and the
//! public per-app review endpoints.
//!
//! Fixed paths (`/trending`, `/search/{query}`) are registered before the
//! `/{id}` routes so they are never captured as ids.

mod create;
mod delete;
mod get;
mod list;
mod ratings;
mod search;
mod update;

use crate::services::reviews;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/apps";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/trending", get().to(list::trending))
        .route("/search/{query}", get().to(search::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/ratings", post().to(ratings::process))
        .route("/{id}/reviews", get().to(reviews::list::for_app))
        .route("/{id}/reviews", post().to(reviews::submit::process))
}
