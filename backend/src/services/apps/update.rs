use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::app::AppPatch;

/// `PUT /api/apps/{id}`: merges the given fields into the stored app.
/// Fields absent from the payload keep their current values.
pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<AppPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let patch = payload.into_inner();
    patch.validate().map_err(ApiError::Validation)?;

    let app = with_db(&state.db, move |db| db.modify_app(&id, |app| app.apply(patch)))
        .await?
        .ok_or(ApiError::NotFound("App not found"))?;
    Ok(HttpResponse::Ok().json(app))
}
