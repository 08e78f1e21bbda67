//! Numeric path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::convert::Infallible;

/// Extractor for integer id path parameters.
///
/// The segment is read the way a JavaScript `parseInt` reads it: leading
/// whitespace, an optional sign, then the longest run of digits (hex after a
/// `0x` prefix). Trailing characters are ignored, so `1abc` and `1.5` both
/// name id 1.
///
/// Anything that does not produce a non-negative integer yields
/// `IdPath(None)` instead of a rejection, so handlers answer it exactly like
/// an id that matches nothing. This includes segments that are not valid
/// UTF-8 once percent-decoded.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     match id {
///         Some(id) => format!("Item ID: {}", id),
///         None => "no such item".to_string(),
///     }
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub Option<u64>);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| parse_int_prefix(&raw));

        Ok(IdPath(id))
    }
}

/// Integer prefix of `raw`, `None` when there is none or it is negative.
fn parse_int_prefix(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(s.len());
    let value = u64::from_str_radix(&s[..end], radix).ok()?;

    // -0 still names id 0
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        format!("{:?}", id)
    }

    async fn call(uri: &str) -> String {
        let app = Router::new().route("/items/{id}", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_numeric_segment_parses() {
        assert_eq!(call("/items/42").await, "Some(42)");
        assert_eq!(call("/items/01").await, "Some(1)");
        assert_eq!(call("/items/+7").await, "Some(7)");
    }

    #[tokio::test]
    async fn test_leading_integer_prefix_is_used() {
        assert_eq!(call("/items/1abc").await, "Some(1)");
        assert_eq!(call("/items/1.5").await, "Some(1)");
        assert_eq!(call("/items/%201").await, "Some(1)");
    }

    #[tokio::test]
    async fn test_non_numeric_segment_is_none() {
        assert_eq!(call("/items/abc").await, "None");
        assert_eq!(call("/items/-1").await, "None");
        assert_eq!(call("/items/-").await, "None");
        assert_eq!(call("/items/.5").await, "None");
    }

    #[tokio::test]
    async fn test_invalid_utf8_segment_is_none() {
        assert_eq!(call("/items/%FF").await, "None");
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("12px"), Some(12));
        assert_eq!(parse_int_prefix("0x1A"), Some(26));
        assert_eq!(parse_int_prefix("0xZ"), None);
        assert_eq!(parse_int_prefix("-0"), Some(0));
        assert_eq!(parse_int_prefix("-3"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
    }
}
