use actix_web::{HttpResponse, web};

use crate::state::app_state::AppState;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("QR service is running")
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    // Ping the store to check the backend connection
    match state.store.ping().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "success": false, "error": "Storage connection failed" }))
        }
    }
}
