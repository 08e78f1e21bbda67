//! Items Domain
//!
//! A single-resource CRUD domain: items with an `id`, a `name` and a
//! `description`, kept in a volatile in-memory store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage + id allocation (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ITEM_NOT_FOUND, ItemError, ItemResult, NAME_AND_DESCRIPTION_REQUIRED};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItem, Item, ItemId, ItemUpdated, MessageResponse, UpdateItem};
pub use repository::ItemRepository;
pub use service::ItemService;
