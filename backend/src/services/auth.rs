//! # Admin Password Check
//!
//! `POST /api/auth` compares the submitted password with the configured
//! secret. The admin panel calls it before showing its controls; no session
//! or token is issued.

use crate::state::AppState;
use actix_web::web::{post, scope};
use actix_web::{web, HttpResponse, Scope};
use common::requests::{AuthRequest, AuthResponse};

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(process))
}

/// - `200 OK` with `{"success": true}` when the password matches.
/// - `401 Unauthorized` with `{"success": false}` otherwise, including a
///   missing or unreadable body.
pub async fn process(
    state: web::Data<AppState>,
    payload: Option<web::Json<AuthRequest>>,
) -> HttpResponse {
    let success = payload
        .is_some_and(|payload| check_password(&state.admin_password, &payload.password));
    if success {
        HttpResponse::Ok().json(AuthResponse { success })
    } else {
        log::warn!("rejected admin password attempt");
        HttpResponse::Unauthorized().json(AuthResponse { success })
    }
}

pub fn check_password(secret: &str, submitted: &str) -> bool {
    secret == submitted
}
