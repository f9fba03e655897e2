//! Admin access check for mutating and moderation routes.
//!
//! Handlers that belong to the admin panel take an [`AdminAccess`] argument.
//! When `ENFORCE_ADMIN_AUTH` is off (the default) the extractor always
//! succeeds, keeping the panel's password check advisory. When it is on, the
//! request must carry the admin password in the `x-admin-password` header.

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug)]
pub struct AdminAccess;

pub fn require_admin(req: &HttpRequest) -> Result<AdminAccess, ApiError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        log::error!("application state missing from request");
        return Err(ApiError::Unauthorized);
    };
    if !state.enforce_admin_auth {
        return Ok(AdminAccess);
    }

    let presented = req
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|h| h.to_str().ok());

    match presented {
        Some(password) if password == state.admin_password => Ok(AdminAccess),
        _ => Err(ApiError::Unauthorized),
    }
}

impl FromRequest for AdminAccess {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(require_admin(req))
    }
}
