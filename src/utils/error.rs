use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;

use super::i18n::get_locale;

/// API error with context and automatic error trait implementations
///
/// Design: uses thiserror for ergonomic error handling with context.
/// Each variant carries enough detail to diagnose the failure from logs.
#[derive(Error, Debug)]
pub enum ApiError {
    // Validation errors 4xxx
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // System errors 5xxx
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    // Generic wrapper for other errors - auto-convert from anyhow::Error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Helper to create a validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Helper to create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Helper to create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) => 4001,
            Self::InvalidInput(_) => 4002,
            Self::InternalError(_) => 5001,
            Self::Template(_) => 5002,
            Self::Other(_) => 5001,
        }
    }

    /// Get localized error message based on the current locale
    pub fn localized_message(&self) -> String {
        let locale = get_locale();
        let locale = locale.as_str();
        match self {
            Self::ValidationError(details) => {
                t!("validation.failed", locale = locale, details = details).to_string()
            }
            Self::InvalidInput(msg) => msg.clone(),
            Self::InternalError(msg) => {
                t!("internal.error", locale = locale, message = msg).to_string()
            }
            Self::Template(err) => {
                t!("internal.error", locale = locale, message = err.to_string()).to_string()
            }
            Self::Other(err) => {
                t!("internal.error", locale = locale, message = err.to_string()).to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub code: i32,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.error_code();
        let message = self.localized_message();

        let status = match code {
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        }

        let response = ApiErrorResponse { success: false, code, message };

        (status, Json(response)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal_error(format!("JSON serialization error: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::validation_error("x").error_code(), 4001);
        assert_eq!(ApiError::invalid_input("x").error_code(), 4002);
        assert_eq!(ApiError::internal_error("x").error_code(), 5001);
    }

    #[test]
    fn test_error_codes_map_to_statuses() {
        let response = ApiError::invalid_input("bad payload").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::internal_error("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
