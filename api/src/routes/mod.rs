//! HTTP route handlers
//!
//! Route surface:
//! - `GET /` - hello banner
//! - `GET /health` - service health document
//! - `GET /token` - freshly issued token as plain text
//! - `GET /qr` - freshly issued token as a QR-code PNG
//! - `POST /verify` - verdict for the token in the request body

pub mod qr;
pub mod token;
pub mod verify;

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use qp_core::services::token::TokenService;
use qp_shared::types::ErrorResponse;

/// Shared application state injected into every handler
///
/// The token service is constructed once at startup and shared read-only
/// across all workers.
#[derive(Clone)]
pub struct AppState {
    /// The single token service instance backing all requests
    pub token_service: Arc<TokenService>,
}

/// Registers all routes on the application
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/token", web::get().to(token::get_token))
        .route("/qr", web::get().to(qr::get_qr))
        .route("/verify", web::post().to(verify::post_verify));
}

/// Handler for GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello World!")
}

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "qrpass-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found".to_string(),
        "The requested resource was not found".to_string(),
    ))
}
