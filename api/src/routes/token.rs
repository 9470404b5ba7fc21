use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for GET /token
///
/// Issues a fresh ES256-signed token and returns its compact serialization
/// as plain text. Issuance is unauthenticated: these are short-lived
/// testing tokens.
///
/// # Response
///
/// - 200 OK: the dot-separated base64url token
/// - 500 Internal Server Error: signing failed (not expected with validly
///   loaded key material)
pub async fn get_token(state: web::Data<AppState>) -> HttpResponse {
    match state.token_service.issue() {
        Ok(token) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(token),
        Err(error) => handle_domain_error(error),
    }
}
