//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to appropriate HTTP responses. Every failure maps to
//! exactly one response shape; none is retried here.

use crate::repositories::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bmi_tracker_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Measurement submission or name lookup arrived without an account id
    #[error("Account id is required")]
    MissingAccountId,

    /// The supplied account id does not resolve to a registered account
    #[error("Account {0} does not exist")]
    UnknownAccount(i64),

    /// Uniform authentication failure; never reveals which field was wrong
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account exists but has no recorded measurement; login requires one
    #[error("BMI information not found")]
    NoMeasurementHistory,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UnknownAccount(id) => ApiError::UnknownAccount(id),
            StorageError::Database(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::MissingAccountId => {
                (StatusCode::BAD_REQUEST, "MISSING_ACCOUNT_ID", self.to_string())
            }
            ApiError::UnknownAccount(_) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_ACCOUNT", self.to_string())
            }
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", self.to_string())
            }
            ApiError::NoMeasurementHistory => {
                (StatusCode::NOT_FOUND, "NO_MEASUREMENT_HISTORY", self.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field: None,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::Validation("missing name".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::MissingAccountId, StatusCode::BAD_REQUEST)]
    #[case(ApiError::UnknownAccount(42), StatusCode::BAD_REQUEST)]
    #[case(ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED)]
    #[case(ApiError::NoMeasurementHistory, StatusCode::NOT_FOUND)]
    #[case(ApiError::NotFound("Account not found".to_string()), StatusCode::NOT_FOUND)]
    fn error_maps_to_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn invalid_credentials_message_is_fixed() {
        // The message must not vary with which field was wrong
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn storage_unknown_account_becomes_client_error() {
        let api: ApiError = StorageError::UnknownAccount(7).into();
        assert!(matches!(api, ApiError::UnknownAccount(7)));
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
