//! # API Errors
//!
//! Error type returned by the submission handlers. Every error renders as
//! `{ "message": "..." }`; internal details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::submissions::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Submission API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing field or malformed value
    #[error("{0}")]
    Validation(String),

    /// Body that is not JSON, or not a JSON object
    #[error("Invalid request body")]
    InvalidBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; `message` is the public retry-later text
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn internal(message: &'static str, source: StoreError) -> Self {
        ApiError::Internal { message, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every non-created response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(_) => {}
            ApiError::InvalidBody(detail) => {
                tracing::debug!(detail = %detail, "rejected request body");
            }
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
        }

        let status = self.status_code();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation("All fields are required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("EOF".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("Try later", StoreError::LockPoisoned("t")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_hides_source() {
        let err = ApiError::internal(
            "Failed to subscribe. Please try again later.",
            StoreError::LockPoisoned("newsletter_subscribers"),
        );
        let text = err.to_string();
        assert_eq!(text, "Failed to subscribe. Please try again later.");
        assert!(!text.contains("newsletter_subscribers"));
    }

    #[test]
    fn test_invalid_body_hides_detail() {
        let err = ApiError::InvalidBody("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Invalid request body");
    }
}
