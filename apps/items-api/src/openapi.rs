//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple In-Memory Store API",
        version = "1.0.0",
        description = "A simple API for managing items with in-memory storage",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(crate::api::root::hello),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Root", description = "Service greeting"),
        (name = "Items", description = "Item management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;
