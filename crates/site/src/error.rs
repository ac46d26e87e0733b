//! Unified error handling for the site.
//!
//! Provides a unified `AppError` type converted to client responses. All
//! route handlers that can fail return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::EmailError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Email delivery failed.
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Email(_) | Self::Template(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        // The contact form reads JSON; delivery failures keep that shape.
        if matches!(self, Self::Email(_)) {
            return (
                StatusCode::BAD_GATEWAY,
                axum::Json(serde_json::json!({
                    "success": false,
                    "message": "Failed to send message. Please try again.",
                })),
            )
                .into_response();
        }

        let status = match &self {
            Self::Email(_) => StatusCode::BAD_GATEWAY,
            Self::Template(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Template(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
