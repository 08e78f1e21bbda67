use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemId, UpdateItem};

/// Repository trait for Item storage
///
/// The authoritative collection of items plus the id-allocation rule.
/// Each method is one atomic step: implementations must not let two calls
/// interleave their read-modify-write sequences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every stored item, in insertion order
    async fn all(&self) -> ItemResult<Vec<Item>>;

    /// Look up an item by ID
    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Store a new item under `max(existing ids) + 1`, or `1` when empty.
    /// Inputs are expected to be validated by the caller.
    async fn insert(&self, name: String, description: String) -> ItemResult<Item>;

    /// Overwrite the non-empty fields of `update` in place; `None` if no
    /// item has this ID
    async fn update_fields(&self, id: ItemId, update: UpdateItem) -> ItemResult<Option<Item>>;

    /// Remove an item; returns whether anything was removed
    async fn delete_by_id(&self, id: ItemId) -> ItemResult<bool>;

    /// Number of stored items
    async fn count(&self) -> ItemResult<usize>;
}
