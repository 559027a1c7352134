//! Per-route pipeline stages. Every request goes through the logger; mutating
//! routes add the API-key check; create/update add the body validator. Each
//! stage either forwards to `next.run` or short-circuits with its own response.

pub mod auth;
pub mod validate;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Unconditional request logger. The subscriber supplies the timestamp; this
/// just tags method and path. Never errors, never touches the request.
pub async fn log_request(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri().path(), "Incoming request");
    next.run(request).await
}
