//! Lenient JSON body extractor.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that tolerates absent bodies.
///
/// - no `Content-Type: application/json` (or `+json`) header → `T::default()`
/// - empty or whitespace-only body → `T::default()`
/// - anything else is decoded with `serde_json`; a decode failure is an
///   [`AppError::SerdeJson`] (500)
///
/// Use this for payloads whose fields are all optional and where "nothing
/// sent" has to reach the service layer so it can produce its own
/// validation error.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Patch {
///     name: Option<String>,
/// }
///
/// async fn patch(JsonBody(patch): JsonBody<Patch>) -> String {
///     patch.name.unwrap_or_default()
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(JsonBody(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::from(e).into_response())
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
