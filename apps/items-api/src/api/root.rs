/// Greeting served at the root URL
pub const GREETING: &str = "Hello, world!";

/// Root route
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "A successful response", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    GREETING
}
