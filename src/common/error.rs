// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// API error types
///
/// Every variant renders as the failure envelope `{"success": false, "message": ...}`.
/// Database details never leave the process; they are logged where the error is raised.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    InvalidAction,
    MethodNotAllowed,
    NotFound(&'static str),
    Persistence {
        message: &'static str,
        source: sqlx::Error,
    },
    InternalServer(String),
}

impl ApiError {
    pub fn persistence(message: &'static str, source: sqlx::Error) -> Self {
        ApiError::Persistence { message, source }
    }

    /// Message placed in the failure envelope
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::InvalidAction => "Invalid action",
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::NotFound(msg) => msg,
            ApiError::Persistence { message, .. } => message,
            ApiError::InternalServer(_) => "Internal server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidAction => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence { .. } | ApiError::InternalServer(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::InvalidAction => write!(f, "Invalid action"),
            ApiError::MethodNotAllowed => write!(f, "Method not allowed"),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Persistence { message, source } => {
                write!(f, "Persistence Error: {} ({})", message, source)
            }
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Persistence { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// JSON failure envelope
#[derive(Serialize)]
pub struct FailureEnvelope<'a> {
    pub success: bool,
    pub message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if let ApiError::InternalServer(detail) = &self {
            debug!(detail = %detail, "Internal error rendered as failure envelope");
        }

        let body = FailureEnvelope {
            success: false,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}
