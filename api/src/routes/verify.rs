use actix_web::{web, HttpResponse};

use super::AppState;

/// Handler for POST /verify
///
/// Reads the bearer-submitted token verbatim from the request body and
/// returns the verdict label (`VALID` / `EXPIRED` / `NOT_VALID`) as plain
/// text. Malformed input is an expected outcome and maps to `NOT_VALID`,
/// never to an error status.
pub async fn post_verify(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let token = String::from_utf8_lossy(&body);
    let verdict = state.token_service.verify(&token);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(verdict.as_str())
}
