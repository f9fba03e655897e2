use crate::error::ApiError;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/apps`: every app, ascending by `order`.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let apps = with_db(&state.db, |db| db.list_apps()).await?;
    Ok(HttpResponse::Ok().json(apps))
}

/// `GET /api/apps/trending`: apps flagged as trending, ascending by `order`.
pub async fn trending(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let apps = with_db(&state.db, |db| db.list_trending_apps()).await?;
    Ok(HttpResponse::Ok().json(apps))
}
