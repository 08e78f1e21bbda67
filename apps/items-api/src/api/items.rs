//! Items API routes
//!
//! Wires the items domain to HTTP routes.

use axum::Router;
use domain_items::{InMemoryItemRepository, ItemService, handlers};

/// Create items router backed by a fresh, empty in-memory store
pub fn router() -> Router {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);

    handlers::router(service)
}
