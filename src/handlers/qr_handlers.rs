use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::qr_code::QrRecord;
use crate::state::app_state::AppState;
use crate::structs::qr_request::{
    ContactQrResponse, CreateContactQrRequest, CreateQrRequest, UpdateQrRequest, UrlQrResponse,
};
use crate::utils::id::generate_id;
use crate::utils::qr_image::render_data_url;
use crate::utils::vcard::build_vcard;

/// Create a redirect QR code pointing at `/r/{id}`
pub async fn create_url_qr(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<CreateQrRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let id = generate_id();
    let qr_url = app_state.redirect_url(&id);

    // Render before writing so a failed render leaves nothing behind
    let qr_image = render_data_url(&qr_url)?;

    let record = QrRecord::new_url(id.clone(), req.title, req.target_url);
    app_state.store.insert(&record).await?;

    log::info!("Created url QR {}", id);

    Ok(HttpResponse::Ok().json(UrlQrResponse {
        id,
        qr_url,
        qr_image,
    }))
}

/// Create a QR code that embeds a vCard directly
pub async fn create_contact_qr(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<CreateContactQrRequest>,
) -> Result<HttpResponse, ApiError> {
    let missing_fields = || ApiError::BadRequest("Missing required contact fields".to_string());

    req.validate().map_err(|_| missing_fields())?;
    let contact = req
        .contact
        .and_then(|contact| contact.into_contact())
        .ok_or_else(missing_fields)?;

    // Name is required, so it always makes a usable title
    let title = req
        .title
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| contact.name.clone());

    let qr_image = render_data_url(&build_vcard(&contact))?;

    let id = generate_id();
    let record = QrRecord::new_contact(id.clone(), title, contact);
    app_state.store.insert(&record).await?;

    log::info!("Created contact QR {}", id);

    Ok(HttpResponse::Ok().json(ContactQrResponse { id, qr_image }))
}

/// Point an existing url-type QR code at a new target
pub async fn update_qr(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(req): web::Json<UpdateQrRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    req.validate()?;

    let not_found = || ApiError::NotFound("QR not found".to_string());

    let record = app_state.store.get(&id).await?.ok_or_else(not_found)?;
    if record.redirect_target().is_none() {
        return Err(not_found());
    }

    // updatedAt must move forward even within the same millisecond
    let updated_at = chrono::Utc::now()
        .timestamp_millis()
        .max(record.updated_at + 1);
    let updated = app_state
        .store
        .update_target(&id, &req.target_url, updated_at)
        .await?;

    if !updated {
        return Err(not_found());
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Updated successfully" })))
}

/// List every stored QR record
pub async fn get_all_qr_codes(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = app_state.store.list_all().await?;
    Ok(HttpResponse::Ok().json(records))
}
