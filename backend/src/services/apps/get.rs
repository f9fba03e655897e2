use crate::error::{parse_id, ApiError};
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let app = with_db(&state.db, move |db| db.get_app(&id))
        .await?
        .ok_or(ApiError::NotFound("App not found"))?;
    Ok(HttpResponse::Ok().json(app))
}
