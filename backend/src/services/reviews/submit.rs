use crate::database;
use crate::error::{parse_id, ApiError};
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::review::{Review, ReviewDraft};
use uuid::Uuid;

/// `POST /api/apps/{id}/reviews`: stores a pending review.
///
/// Every submission gets a fresh `userId` token, returned in the `201`
/// response so the submitter can later present it in the `x-user-id`
/// header and see the review before it is approved. The app id is not
/// checked against the catalog.
pub async fn process(
    state: web::Data<AppState>,
    app_id: web::Path<String>,
    payload: web::Json<ReviewDraft>,
) -> Result<HttpResponse, ApiError> {
    let app_id = parse_id(&app_id)?;
    let draft = payload.into_inner();
    draft.validate().map_err(ApiError::Validation)?;

    let review = Review::from_draft(
        Uuid::new_v4().to_string(),
        app_id,
        issue_token(),
        draft,
        database::now(),
    );
    let review = with_db(&state.db, move |db| db.insert_review(&review).map(|_| review)).await?;

    log::info!("review {} submitted for app {}", review.id, review.app_id);
    Ok(HttpResponse::Created().json(review))
}

/// A new random submitter token. Tokens are never reused.
fn issue_token() -> String {
    Uuid::new_v4().simple().to_string()
}
