//! Centralized error handling.
//!
//! Three kinds of failure flow through [`AppError`]:
//! fatal startup errors (environment), recoverable remote-config errors
//! (swallowed by the config loader) and development server errors (turned
//! into HTTP responses).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::Violations;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Startup
    #[error(
        "Missing environment variable: {key}. Define it in .env like this: `{key}={example}`."
    )]
    MissingEnv { key: String, example: String },

    #[error("Invalid environment variable name `{0}`: expected CLIENT_<NAME>")]
    InvalidEnvKey(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidEnv { key: String, reason: String },

    // Remote config
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Request aborted")]
    Aborted,

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Public config failed validation: {0}")]
    InvalidConfig(Violations),

    // Server
    #[error("{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingEnv { .. } => "MISSING_ENV",
            AppError::InvalidEnvKey(_) | AppError::InvalidEnv { .. } => "INVALID_ENV",
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Status(_) => "UPSTREAM_STATUS",
            AppError::Timeout => "TIMEOUT",
            AppError::Aborted => "ABORTED",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::InvalidConfig(_) => "INVALID_CONFIG",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures the config loader tolerates by keeping defaults.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Http(_)
                | AppError::Status(_)
                | AppError::Timeout
                | AppError::Aborted
                | AppError::Decode(_)
                | AppError::InvalidConfig(_)
        )
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Http(_) | AppError::Status(_) | AppError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
