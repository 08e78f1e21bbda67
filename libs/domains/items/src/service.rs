//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult, NAME_AND_DESCRIPTION_REQUIRED};
use crate::models::{CreateItem, Item, ItemId, ItemUpdated, MessageResponse, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates input, delegates to the repository and turns missing records
/// into [`ItemError::NotFound`]. Owns its repository exclusively.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.all().await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound)
    }

    /// Create a new item
    ///
    /// Both `name` and `description` must be present and non-empty.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let (name, description) = input
            .validate()
            .ok()
            .and_then(|()| input.name.zip(input.description))
            .ok_or_else(|| ItemError::Validation(NAME_AND_DESCRIPTION_REQUIRED.to_string()))?;

        let item = self.repository.insert(name, description).await?;
        let total_items = self.repository.count().await?;
        tracing::info!(item_id = item.id, total_items, "Item created successfully");
        Ok(item)
    }

    /// Update an existing item; absent or empty fields are left unchanged
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: ItemId, input: UpdateItem) -> ItemResult<ItemUpdated> {
        let item = self
            .repository
            .update_fields(id, input)
            .await?
            .ok_or(ItemError::NotFound)?;

        let total_items = self.repository.count().await?;
        tracing::info!(item_id = id, total_items, "Item updated successfully");
        Ok(ItemUpdated {
            message: format!("Item with id {} has been updated", id),
            item,
        })
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<MessageResponse> {
        if !self.repository.delete_by_id(id).await? {
            return Err(ItemError::NotFound);
        }

        let total_items = self.repository.count().await?;
        tracing::info!(item_id = id, total_items, "Item deleted successfully");
        Ok(MessageResponse {
            message: format!("Item with id {} has been deleted", id),
        })
    }

    /// Number of stored items, also logged after every mutation
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
