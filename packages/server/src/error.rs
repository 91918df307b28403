//! Application error taxonomy and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::website::ValidationError;

/// Errors surfaced by the JSON API.
///
/// Generation-backend failures never appear here: the generator absorbs
/// them and falls back to demo mode internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input violates the request schema (400, full field detail).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown website id (404).
    #[error("website not found")]
    NotFound,

    /// Unexpected failure (500, generic message; detail logged only).
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation error",
                    "errors": err.errors,
                })),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Website not found" })),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
