//! Domain error to HTTP response mapping

use actix_web::{http::StatusCode, HttpResponse};

use qp_core::errors::{DomainError, TokenError};
use qp_shared::types::ErrorResponse;

/// Converts a domain error into an HTTP response with a JSON body
///
/// Only issuance can surface domain errors to this layer; verification
/// always produces a verdict. Everything arriving here is a server-side
/// failure, so the status is 500 and the code distinguishes the cause.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("API error: {}", error);

    let code = match &error {
        DomainError::Token(TokenError::KeyLoad { .. }) => "key_unavailable",
        DomainError::Token(TokenError::SigningFailed) => "token_generation_failed",
        _ => "internal_error",
    };

    let body = ErrorResponse::new(code.to_string(), "An internal error occurred".to_string());
    HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).json(body)
}
