//! Embedded frontend. `GET /` serves the storefront, `GET /admin` the admin
//! panel; any other non-API path is looked up in the embedded directory and
//! falls back to the storefront so client-side routes resolve.

use crate::error::ApiError;
use actix_web::web::{self, get};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX_PAGE: &str = "index.html";
const ADMIN_PAGE: &str = "admin.html";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", get().to(index))
        .route("/admin", get().to(admin))
        .default_service(web::route().to(serve_embedded));
}

async fn index() -> HttpResponse {
    serve_file(INDEX_PAGE)
}

async fn admin() -> HttpResponse {
    serve_file(ADMIN_PAGE)
}

fn serve_file(file_path: &str) -> HttpResponse {
    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

async fn serve_embedded(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return Err(ApiError::NotFound("Route not found"));
    }

    let file_path = if path.is_empty() { INDEX_PAGE } else { path };
    if STATIC_DIR.get_file(file_path).is_some() {
        Ok(serve_file(file_path))
    } else {
        Ok(serve_file(INDEX_PAGE))
    }
}
