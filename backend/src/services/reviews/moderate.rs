use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ApprovalRequest;

/// `PUT /api/reviews/{id}`: approves or rejects a review.
pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<ApprovalRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let approved = payload.approved;

    let review = with_db(&state.db, move |db| db.set_review_approval(&id, approved))
        .await?
        .ok_or(ApiError::NotFound("Review not found"))?;

    log::info!("review {} approved={}", review.id, review.approved);
    Ok(HttpResponse::Ok().json(review))
}
