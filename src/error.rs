//! Application error type shared by every layer.
//!
//! Errors travel as explicit [`Result`] values from the repository through the
//! service to the handler, where [`IntoResponse`] turns them into the JSON
//! body `{"status": "<message>"}` with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing client input. Detected before any store access.
    #[error("{message}")]
    Validation { message: String },

    /// Persistence failure or any other unexpected condition.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flatten()
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::bad_request(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::bad_request("Empty list");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Empty list");
    }

    #[test]
    fn test_internal_maps_to_server_error() {
        let err = AppError::internal("connection refused");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_validation_errors_keep_field_message() {
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "links",
            validator::ValidationError::new("length").with_message("Empty list".into()),
        );

        let err: AppError = errors.into();
        assert!(matches!(&err, AppError::Validation { message } if message == "Empty list"));
    }

    #[test]
    fn test_sqlx_error_becomes_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
