use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{error::AppError, AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Gate for the mutating routes. The supplied `x-api-key` header must exactly
/// match the configured secret; anything else short-circuits with 401 and the
/// downstream handler never runs.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(key) if key == state.config.api_key => next.run(request).await,
        _ => {
            warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected request with invalid or missing API key"
            );
            AppError::Unauthorized.into_response()
        }
    }
}
