use actix_web::web;

use crate::errors::json_error_handler;
use crate::handlers::health_handlers::{health_check, index};
use crate::handlers::qr_handlers::{
    create_contact_qr, create_url_qr, get_all_qr_codes, update_qr,
};
use crate::handlers::redirect_handlers::redirect_to_target;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.route("/", web::get().to(index));
    cfg.route("/health", web::get().to(health_check));
    // Scanned redirect-type QR codes land here
    cfg.route("/r/{id}", web::get().to(redirect_to_target));
    cfg.service(
        web::scope("/qr")
            .route("", web::post().to(create_url_qr))
            .route("", web::get().to(get_all_qr_codes))
            .route("/contact", web::post().to(create_contact_qr))
            .route("/{id}", web::put().to(update_qr)),
    );
}
