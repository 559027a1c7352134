use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Application-level error. The first three variants are produced locally by
/// middleware and handlers and carry fixed response bodies; `Internal` is the
/// catch-all for anything unexpected and is rendered opaque to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("validation failed")]
    Validation,

    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: Invalid or missing API key",
            ),
            AppError::Validation => (
                StatusCode::BAD_REQUEST,
                "Validation Error: Invalid product data",
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            AppError::Internal(err) => {
                // Log the detail server-side; the caller only sees a generic body.
                error!(error = %err, "Unhandled error in request handler");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
