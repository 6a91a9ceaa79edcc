use actix_web::{HttpResponse, Result, http, web};

use crate::errors::ApiError;
use crate::state::app_state::AppState;

/// Redirect a scanned QR code to its stored target
pub async fn redirect_to_target(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let record = match app_state.store.get(&id).await? {
        Some(record) => record,
        None => return Ok(HttpResponse::NotFound().body("QR not found")),
    };

    match record.redirect_target() {
        Some(target) => Ok(HttpResponse::Found()
            .append_header((http::header::LOCATION, target))
            .finish()),
        None => Ok(HttpResponse::NotFound().body("QR has no redirect target")),
    }
}
