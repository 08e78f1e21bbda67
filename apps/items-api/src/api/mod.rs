//! API routes module

pub mod items;
pub mod root;

use axum::{Router, routing::get};
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root::hello))
        .nest("/items", items::router())
        .merge(health_router(state.config.app))
}
