//! Server infrastructure module.
//!
//! - Application setup with OpenAPI documentation
//! - Health endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, &config)?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
