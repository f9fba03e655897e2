//! # Rating Snapshot
//!
//! `POST /api/apps/{id}/ratings` receives the complete star-count breakdown
//! of an app, e.g. `{"ratings": {"five": 2, "four": 1, "one": 1}}`. Missing
//! levels count as zero.
//!
//! The stored breakdown is replaced, never incremented, so re-submitting
//! the same snapshot is idempotent. `totalRatings` becomes the sum of the
//! counts and `rating` the weighted average rounded to one decimal, or `0`
//! when every count is zero.

use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::SetRatingsRequest;

pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<SetRatingsRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let breakdown = payload.into_inner().ratings;

    let app = with_db(&state.db, move |db| {
        db.modify_app(&id, |app| app.set_rating_breakdown(breakdown))
    })
    .await?
    .ok_or(ApiError::NotFound("App not found"))?;
    Ok(HttpResponse::Ok().json(app))
}
