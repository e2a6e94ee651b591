//! # HTTP Errors
//!
//! Error type for the asset endpoints and its mapping onto status codes.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::asset::ValidationError;
use crate::repository::RepositoryError;

/// Result type for route handlers
pub type RestResult<T> = Result<T, RestError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required field blank
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Body, path or query could not be decoded
    #[error("Invalid request: {0}")]
    InvalidBody(String),

    /// Unknown asset id
    #[error("Asset {0} not found")]
    NotFound(i64),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for RestError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => RestError::NotFound(id),
            RepositoryError::Database(e) => {
                // Driver detail stays in the log.
                tracing::error!(error = %e, "store operation failed");
                RestError::Internal("store operation failed".to_string())
            }
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
