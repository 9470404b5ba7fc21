use actix_web::{web, HttpResponse};
use log::error;

use qp_shared::types::ErrorResponse;

use crate::handlers::error::handle_domain_error;
use crate::qr::token_qr_png;

use super::AppState;

/// Handler for GET /qr
///
/// Issues a fresh token and returns it rendered as a QR-code PNG, so a
/// client can hand the token to a device by scanning instead of pasting.
///
/// # Response
///
/// - 200 OK: `image/png` body
/// - 500 Internal Server Error: issuance or rendering failed
pub async fn get_qr(state: web::Data<AppState>) -> HttpResponse {
    let token = match state.token_service.issue() {
        Ok(token) => token,
        Err(error) => return handle_domain_error(error),
    };

    match token_qr_png(&token) {
        Ok(png) => HttpResponse::Ok().content_type("image/png").body(png),
        Err(e) => {
            error!("QR rendering failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "qr_encoding_failed".to_string(),
                "Failed to render the token QR code".to_string(),
            ))
        }
    }
}
