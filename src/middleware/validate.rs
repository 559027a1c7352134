use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{error::AppError, models::ProductPayload};

/// Body check for create and update: the payload must deserialize into the
/// product schema (numeric price, boolean inStock, all fields present) and its
/// string fields must be non-empty. On success the original bytes are handed
/// on unmodified; on failure the handler never runs.
pub async fn validate_product(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return AppError::Validation.into_response(),
    };

    let valid = serde_json::from_slice::<ProductPayload>(&bytes)
        .map_err(|_| ())
        .and_then(|payload| payload.validate().map_err(|_| ()))
        .is_ok();

    if !valid {
        warn!(path = %parts.uri.path(), "Rejected invalid product payload");
        return AppError::Validation.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
