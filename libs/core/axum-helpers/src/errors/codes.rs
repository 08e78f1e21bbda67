//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::RouteNotFound;
//! assert_eq!(code.as_str(), "ROUTE_NOT_FOUND");
//! assert_eq!(code.code(), 1006);
//! assert_eq!(code.default_message(), "Route Not Found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// No route matches the request method and path
    RouteNotFound,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Request body could not be decoded as JSON
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors and generic server errors
    /// - 5000-5999: Serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::RouteNotFound => 1006,
            Self::SerdeJsonError => 5001,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// Server-side codes all share the same opaque message so that no
    /// diagnostic detail reaches the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Route Not Found",
            Self::InternalError | Self::SerdeJsonError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
