use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item identifier, assigned by the store and never reused while the
/// process runs
pub type ItemId = u64;

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, strictly positive
    pub id: ItemId,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
}

/// DTO for creating a new item
///
/// Both fields are optional at the wire level so that a missing field
/// surfaces as a validation error rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

/// DTO for updating an existing item
///
/// Absent or empty fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response body of a successful update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdated {
    pub message: String,
    pub item: Item,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl Item {
    /// Apply updates from UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name.filter(|name| !name.is_empty()) {
            self.name = name;
        }
        if let Some(description) = update.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
    }
}
