use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::MessageResponse;

/// `DELETE /api/reviews/{id}`.
pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    if !with_db(&state.db, move |db| db.delete_review(&id)).await? {
        return Err(ApiError::NotFound("Review not found"));
    }
    Ok(HttpResponse::Ok().json(MessageResponse::new("Review deleted successfully")))
}
