use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::MessageResponse;

/// `DELETE /api/apps/{id}`. Reviews of the app are not removed.
pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let target = id.clone();
    if !with_db(&state.db, move |db| db.delete_app(&target)).await? {
        return Err(ApiError::NotFound("App not found"));
    }

    log::info!("deleted app {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse::new("App deleted successfully")))
}
