use axum::{http::StatusCode, response::Response};
use std::any::Any;

use super::{ErrorCode, error_response};

/// Fallback handler for requests that match no route.
///
/// Used both as the router fallback and as the method-not-allowed fallback,
/// so an unknown method on a known path is answered the same way.
pub async fn route_not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message().to_string(),
        ErrorCode::RouteNotFound,
    )
}

/// Converts a handler panic into a 500 response.
///
/// Plug into `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged, never returned.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        "Handler panicked: {}",
        details
    );

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::InternalError.default_message().to_string(),
        ErrorCode::InternalError,
    )
}
