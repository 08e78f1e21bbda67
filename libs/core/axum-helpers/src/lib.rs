//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the Axum services of this
//! workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (numeric id path, lenient JSON body)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, JsonBody};
