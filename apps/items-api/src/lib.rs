//! Items API
//!
//! HTTP service exposing the items domain over a volatile in-memory store.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (HTTP/JSON)
//! axum Router (api/, docs, fallbacks, middleware)
//!   ↓
//! ItemService (domain layer: validation, not-found mapping)
//!   ↓
//! InMemoryItemRepository (id allocation, RwLock-guarded Vec)
//! ```
//!
//! ## Modules
//!
//! - `api`: route wiring and the root greeting
//! - `config`: environment-driven configuration
//! - `openapi`: combined OpenAPI document
//! - `state`: shared application state

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use std::io;

use state::AppState;

/// Build the complete application router: API routes, health, docs,
/// fallbacks and middleware.
pub fn build_router(state: &AppState) -> io::Result<Router> {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state), &state.config.server)
}
