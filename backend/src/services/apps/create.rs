use crate::database;
use crate::error::ApiError;
use crate::services::guard::AdminAccess;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::app::{App, AppDraft};
use uuid::Uuid;

/// `POST /api/apps`: stores a new app built from a partial payload.
///
/// Unset optional fields receive their defaults. A missing or blank `name`
/// is a validation failure. Responds `201 Created` with the stored record.
pub async fn process(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    payload: web::Json<AppDraft>,
) -> Result<HttpResponse, ApiError> {
    let draft = payload.into_inner();
    draft.validate().map_err(ApiError::Validation)?;

    let app = App::from_draft(Uuid::new_v4().to_string(), draft, database::now());
    let app = with_db(&state.db, move |db| db.insert_app(&app).map(|_| app)).await?;

    log::info!("created app {} ({})", app.id, app.name);
    Ok(HttpResponse::Created().json(app))
}
