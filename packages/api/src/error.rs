// ABOUTME: API error type and its structured JSON response
// ABOUTME: Maps storage and validation failures to status codes with sanitized messages

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taskdeck_models::ValidationErrors;
use taskdeck_storage::StorageError;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Main application error type that all handlers should return
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Storage error")]
    Storage(#[from] StorageError),
}

/// Structured error response format for API consistency
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: ErrorDetail,
    request_id: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.summary())
    }
}

impl AppError {
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            AppError::Storage(storage_error) => match storage_error {
                StorageError::NotFound(_) => (StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND"),
                StorageError::NotAssigned { .. } => (StatusCode::NOT_FOUND, "NOT_ASSIGNED"),
                StorageError::DuplicateEmail => (StatusCode::BAD_REQUEST, "EMAIL_EXISTS"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            },
        }
    }

    /// Get user-friendly error message (sanitized for external consumption)
    fn to_user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => format!("Validation failed: {}", msg),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            AppError::Storage(storage_error) => match storage_error {
                StorageError::NotFound(resource) => format!("{} not found", resource),
                StorageError::NotAssigned { .. } => {
                    "User is not assigned to this task".to_string()
                }
                StorageError::DuplicateEmail => "Email already exists".to_string(),
                _ => "Data storage error".to_string(),
            },
        }
    }

    fn is_server_fault(&self) -> bool {
        self.to_status_and_code().0.is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();

        if self.is_server_fault() {
            match &self {
                AppError::Internal(err) => error!(
                    request_id = %request_id,
                    error = %err,
                    "Internal server error occurred"
                ),
                other => error!(
                    request_id = %request_id,
                    storage_error = ?other,
                    "Storage system error"
                ),
            }
        } else {
            tracing::info!(
                request_id = %request_id,
                error_code = %error_code,
                error = %self,
                "API error response"
            );
        }

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message: self.to_user_message(),
            },
            request_id,
        };

        (status_code, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = AppError::validation("title: Title is required");
        let (status, code) = error.to_status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
        assert_eq!(
            error.to_user_message(),
            "Validation failed: title: Title is required"
        );
    }

    #[test]
    fn test_storage_errors_map_to_client_statuses() {
        let not_found = AppError::from(StorageError::NotFound("Task"));
        assert_eq!(not_found.to_status_and_code().0, StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_user_message(), "Task not found");

        let duplicate = AppError::from(StorageError::DuplicateEmail);
        assert_eq!(duplicate.to_status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(duplicate.to_user_message(), "Email already exists");
    }

    #[test]
    fn test_user_message_sanitization() {
        let internal_error = AppError::internal(anyhow::anyhow!(
            "Database connection failed with password xyz"
        ));
        let message = internal_error.to_user_message();
        assert_eq!(message, "An internal server error occurred");
        assert!(!message.contains("password"));

        let storage = AppError::from(StorageError::InvalidData("secret column".to_string()));
        assert_eq!(storage.to_user_message(), "Data storage error");
        assert!(storage.is_server_fault());
    }
}
