//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for catalog access and the HTTP surface.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Required configuration is missing (e.g. the provider API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required argument was absent; rejected before any I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider answered with a non-success status
    #[error("{operation} failed: {status} {status_text} - {body}")]
    Provider {
        operation: &'static str,
        status: u16,
        status_text: String,
        body: String,
    },

    /// Transport failure talking to the provider
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider body could not be decoded
    #[error("Malformed provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// HTTP status used when this error crosses the API boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CatalogError::Provider { .. }
            | CatalogError::Network(_)
            | CatalogError::Parse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
