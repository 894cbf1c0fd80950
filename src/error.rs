//! Error types for the todo service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Service Error Enum ==
/// Unified error type for the todo service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Requested item does not exist
    #[error("Item not found")]
    NotFound,

    /// Method or path outside the dispatch table
    #[error("Unsupported method or missing item ID")]
    UnsupportedRequest,

    /// Body failed required-field validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::UnsupportedRequest => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the todo service.
pub type Result<T> = std::result::Result<T, ServiceError>;
