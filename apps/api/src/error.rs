//! Error handling for the non-GraphQL HTTP surface
//!
//! GraphQL resolvers report errors through async-graphql. Plain HTTP routes
//! (health probes) use [`ApiError`], which maps onto status codes and a JSON
//! body via Axum's `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repositories::RepositoryError;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// The datastore did not answer
    #[error("database connection unavailable")]
    DatabaseUnavailable(#[source] RepositoryError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DatabaseUnavailable(_) => "DATABASE_UNAVAILABLE",
        }
    }

    /// Log the error together with its underlying cause
    pub fn log(&self) {
        match self {
            Self::DatabaseUnavailable(cause) => tracing::warn!(
                error = %cause,
                code = self.error_code(),
                status = self.status_code().as_u16(),
                "Datastore unavailable"
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::DatabaseUnavailable(err)
    }
}
