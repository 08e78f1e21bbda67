use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the given origins.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The listed allowed origins
/// - The methods the API serves (GET, POST, PUT, DELETE, OPTIONS)
/// - Content-Type and Accept headers
/// - 1 hour max age
///
/// # Errors
/// Fails with `InvalidInput` when an origin is not a valid header value or
/// when the list is empty.
pub fn create_cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}
