//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting engine errors to HTTP responses. Every request is answered
//! from its own snapshot, so the only failures are client errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gym_tracker_shared::AnalyticsError;
use serde::Serialize;
use thiserror::Error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match &err {
            AnalyticsError::Validation(validation) => ApiError::Validation {
                message: validation.user_message(),
                field: Some(validation.field.clone()),
            },
            AnalyticsError::DuplicateId { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match self {
            ApiError::Validation { message, field } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
