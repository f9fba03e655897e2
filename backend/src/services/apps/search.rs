use crate::error::ApiError;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/apps/search/{query}`: apps whose name, category or short
/// description contains the query, ignoring case. No match is an empty list.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let apps = with_db(&state.db, move |db| db.search_apps(&query)).await?;
    Ok(HttpResponse::Ok().json(apps))
}
