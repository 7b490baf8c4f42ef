//! Error handling for KrishiMitra
//!
//! Every failure reaches the client as `{"error": <message>, "code": <CODE>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Gateway errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Quota exceeded")]
    QuotaExceeded,

    #[error("AI gateway error: {status}")]
    Upstream { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    // Request errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
            AppError::QuotaExceeded => (StatusCode::PAYMENT_REQUIRED, "QUOTA_EXCEEDED"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            AppError::Upstream { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR"),
            AppError::Transport(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TRANSPORT_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message shown to the farmer
    pub fn user_message(&self) -> String {
        match self {
            AppError::RateLimited => "Rate limit exceeded. Please try again in a moment.".to_string(),
            AppError::QuotaExceeded => {
                "AI service quota exceeded. Please try again later.".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::Configuration(msg) => msg.clone(),
            AppError::Upstream { status, .. } => format!("AI gateway error: {}", status),
            AppError::Transport(msg) => format!("Failed to reach AI gateway: {}", msg),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {:?}", self);
        }

        let body = ErrorResponse {
            error: self.user_message(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<&'static str> for AppError {
    fn from(msg: &'static str) -> Self {
        AppError::Validation(msg.to_string())
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::RateLimited.status_and_code().0,
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::QuotaExceeded.status_and_code().0,
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            AppError::Validation("bad".into()).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("MSP".into()).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Upstream {
                status: 503,
                message: "unavailable".into()
            }
            .status_and_code()
            .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Configuration("missing".into()).status_and_code().1,
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::RateLimited.user_message(),
            "Rate limit exceeded. Please try again in a moment."
        );
        assert_eq!(
            AppError::Upstream {
                status: 500,
                message: "boom".into()
            }
            .user_message(),
            "AI gateway error: 500"
        );
    }

    #[test]
    fn test_validation_from_static_str() {
        let err: AppError = "Soil pH must be between 3.0 and 11.0".into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::QuotaExceeded.into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }
}
