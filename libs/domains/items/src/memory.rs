//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemId, UpdateItem};
use crate::repository::ItemRepository;

/// Volatile item store backed by a vector guarded by a single `RwLock`.
///
/// Reads share the lock; `insert`, `update_fields` and `delete_by_id` hold
/// the write lock for their whole check-then-act sequence, so id allocation
/// stays unique under concurrent requests.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(items: &[Item]) -> ItemId {
        items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    #[instrument(skip(self, name, description), fields(item_name = %name))]
    async fn insert(&self, name: String, description: String) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let item = Item {
            id: Self::next_id(&items),
            name,
            description,
        };
        items.push(item.clone());

        tracing::debug!(item_id = item.id, "Item stored");
        Ok(item)
    }

    #[instrument(skip(self, update))]
    async fn update_fields(&self, id: ItemId, update: UpdateItem) -> ItemResult<Option<Item>> {
        let mut items = self.items.write().await;

        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.apply_update(update);

        Ok(Some(item.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ItemId) -> ItemResult<bool> {
        let mut items = self.items.write().await;

        let before = items.len();
        items.retain(|item| item.id != id);

        Ok(items.len() < before)
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(self.items.read().await.len())
    }
}
