pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Item not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side variants are logged with their full cause and answered with
/// an opaque message; client-side variants echo their message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "JSON parsing error: {:?}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                    ErrorCode::SerdeJsonError,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg, ErrorCode::ValidationError)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    ErrorCode::InternalError,
                )
            }
        };

        error_response(status, message, code)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Route Not Found".to_string(),
///     ErrorCode::RouteNotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_echoes_message() {
        let response = AppError::NotFound("Item not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.message, "Item not found");
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.code, 1004);
    }

    #[tokio::test]
    async fn test_bad_request_echoes_message() {
        let response = AppError::BadRequest("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.message, "name is required");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response =
            AppError::InternalServerError("lock poisoned at store.rs:42".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.message, "Internal Server Error");
        assert!(!body.message.contains("store.rs"));
    }

    #[tokio::test]
    async fn test_serde_json_error_is_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.message, "Internal Server Error");
    }
}
