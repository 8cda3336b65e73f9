//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures are not errors in this sense: they are reported back to the
//! user through [`crate::domain::ValidationError`] and never abort a request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the HTTP layer.
#[derive(Error, Debug)]
pub enum ServerError {
    /// A page template failed to parse or render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Binding or serving the listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServerError
pub type ServerResult<T> = Result<T, ServerError>;
