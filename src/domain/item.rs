//! Grocery item model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category assigned when a create request omits one (or sends an empty string).
pub const DEFAULT_CATEGORY: &str = "Other";

/// Confirmation marker returned alongside a deleted item.
pub const DELETED_MESSAGE: &str = "Grocery item deleted";

/// A single entry of the grocery list. Every stored item has all fields populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItem {
    /// Assigned by the store, never reused within a process lifetime.
    pub id: u64,
    pub name: String,
    pub quantity: i64,
    pub category: String,
    pub purchased: bool,
}

/// Fields supplied on create.
///
/// `name` and `quantity` are required, but kept optional here so a missing value
/// surfaces as a validation error from the service instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased: Option<bool>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_purchased(mut self, purchased: bool) -> Self {
        self.purchased = Some(purchased);
        self
    }
}

/// A fully validated item waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
    pub category: String,
    pub purchased: bool,
}

impl ItemDraft {
    pub fn into_item(self, id: u64) -> GroceryItem {
        GroceryItem {
            id,
            name: self.name,
            quantity: self.quantity,
            category: self.category,
            purchased: self.purchased,
        }
    }
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased: Option<bool>,
}

impl ItemPatch {
    /// Patch that overwrites every mutable field with the values of `item`.
    pub fn from_item(item: &GroceryItem) -> Self {
        Self {
            name: Some(item.name.clone()),
            quantity: Some(item.quantity),
            category: Some(item.category.clone()),
            purchased: Some(item.purchased),
        }
    }

    /// Returns the patched copy of `current`. The id is carried over untouched.
    ///
    /// An empty or whitespace-only `name` or `category` counts as omitted, so a stored
    /// item can never lose its name through an update.
    pub fn apply_to(&self, current: &GroceryItem) -> GroceryItem {
        GroceryItem {
            id: current.id,
            name: non_empty(self.name.as_deref()).unwrap_or(&current.name).to_string(),
            quantity: self.quantity.unwrap_or(current.quantity),
            category: non_empty(self.category.as_deref())
                .unwrap_or(&current.category)
                .to_string(),
            purchased: self.purchased.unwrap_or(current.purchased),
        }
    }
}

/// Body of a successful delete: the confirmation marker plus the removed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedItem {
    pub message: String,
    pub item: GroceryItem,
}

impl DeletedItem {
    pub fn new(item: GroceryItem) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            item,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
