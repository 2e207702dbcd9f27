//! REST API error types
//!
//! Every failed operation ends up here. `CoreError` kinds are mapped to
//! status codes and a uniform JSON body:
//!
//! ```json
//! {"error": {"code": "NOT_FOUND", "message": "Project not found"}}
//! ```

use prj_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const PROJECT_NOT_FOUND_MESSAGE: &str = "Project not found";
pub const PROJECT_NOT_CREATED_MESSAGE: &str = "Project not created";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Update matched no record (400, code NOT_FOUND).
    ///
    /// Long-standing clients rely on updates of missing projects answering
    /// 400 while reads and deletes answer 404.
    #[error("Update target not found: {message} {location}")]
    UpdateNotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed identifier (400)
    #[error("Invalid id: {message} {location}")]
    InvalidId {
        message: String,
        location: ErrorLocation,
    },

    /// Store returned no record for a create (400)
    #[error("Not created: {message} {location}")]
    NotCreated {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Map an update failure, honoring the configured not-found status.
    #[track_caller]
    pub fn from_update_error(e: CoreError, not_found_status: u16) -> Self {
        match e {
            CoreError::NotFound { .. } if not_found_status != StatusCode::NOT_FOUND.as_u16() => {
                ApiError::UpdateNotFound {
                    message: PROJECT_NOT_FOUND_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => ApiError::from(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpdateNotFound { .. }
            | ApiError::Validation { .. }
            | ApiError::InvalidId { .. }
            | ApiError::NotCreated { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } | ApiError::UpdateNotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidId { .. } => "INVALID_ID",
            ApiError::NotCreated { .. } => "NOT_CREATED",
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Log the error with location for debugging
        log::error!("{}", self);

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::UpdateNotFound { message, .. }
            | ApiError::InvalidId { message, .. }
            | ApiError::NotCreated { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert operation failures to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidId { value, .. } => ApiError::InvalidId {
                message: format!("{} is not a valid id", value),
                location,
            },
            CoreError::NotFound { .. } => ApiError::NotFound {
                message: PROJECT_NOT_FOUND_MESSAGE.to_string(),
                location,
            },
            CoreError::NotCreated { .. } => ApiError::NotCreated {
                message: PROJECT_NOT_CREATED_MESSAGE.to_string(),
                location,
            },
            CoreError::Store { message, .. } => {
                // Don't expose internal database details to clients
                log::error!("Store error: {}", message);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
