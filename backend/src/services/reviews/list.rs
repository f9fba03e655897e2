use crate::error::{parse_id, ApiError};
use crate::services::guard::AdminAccess;
use crate::services::reviews::USER_TOKEN_HEADER;
use crate::services::with_db;
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::review::visible;

/// `GET /api/apps/{id}/reviews`: the reviews of one app the caller may
/// see, newest first.
///
/// Without an `x-user-id` header only approved reviews are returned. With
/// one, the caller's own pending reviews are included as well.
pub async fn for_app(
    req: HttpRequest,
    state: web::Data<AppState>,
    app_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let app_id = parse_id(&app_id)?;
    let token = req
        .headers()
        .get(USER_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let mut reviews = with_db(&state.db, move |db| db.reviews_for_app(&app_id)).await?;
    reviews.retain(|review| visible(review, token.as_deref()));
    Ok(HttpResponse::Ok().json(reviews))
}

/// `GET /api/reviews`: every review regardless of approval, annotated with
/// its app's name, newest first.
pub async fn all(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let reviews = with_db(&state.db, |db| db.list_reviews_with_app()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}
