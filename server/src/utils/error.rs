//! Unified error handling
//!
//! Two kinds of failure leave this service: user input errors (4xx,
//! short message in the body) and store/infrastructure errors (500,
//! generic message in the body, detail in the logs). Nothing is
//! retried; every failure is terminal for its request.
//!
//! ```ignore
//! // Return an error
//! Err(AppError::not_found("Reservation abc not found"))
//!
//! // Return a success envelope
//! Ok(Json(ApiResponse::success(data)))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;
use shared::response::ApiResponse;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== User input errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 400
    Validation(String),

    #[error("Resource not found: {0}")]
    /// 404
    NotFound(String),

    #[error("Conflict: {0}")]
    /// 409 (illegal lifecycle transition)
    Conflict(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// 500
    Database(String),

    #[error("Internal server error: {0}")]
    /// 500 (includes the single-tenant misconfiguration case)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),

            // Store errors: log the detail, surface a generic message
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
