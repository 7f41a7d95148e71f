//! The grocery CRUD service.
//!
//! Owns the `ItemStore` and implements list/get/create/update/delete on top of its
//! primitives. One instance is constructed per process and handed to the HTTP
//! handlers through `AppState`; the handlers serialize access with a mutex.

use crate::domain::item::{
    DeletedItem, GroceryItem, ItemDraft, ItemPatch, NewItem, DEFAULT_CATEGORY,
};
use crate::storage::ItemStore;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Name and quantity are required";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required field is missing or malformed. The store is left untouched.
    #[error("{0}")]
    Validation(String),
    /// No item has the requested id. The store is left untouched.
    #[error("Grocery item not found")]
    NotFound,
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub struct GroceryService {
    store: ItemStore,
}

impl GroceryService {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Returns every item in insertion order.
    pub fn list(&self) -> Vec<GroceryItem> {
        self.store.items().to_vec()
    }

    pub fn get(&self, id: u64) -> Result<GroceryItem, ServiceError> {
        self.store.find(id).cloned().ok_or(ServiceError::NotFound)
    }

    /// Validates `new_item`, applies defaults and appends it with the next id.
    pub fn create(&mut self, new_item: NewItem) -> Result<GroceryItem, ServiceError> {
        let name = new_item
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ServiceError::validation(MISSING_FIELDS_MESSAGE))?;
        let quantity = new_item
            .quantity
            .ok_or_else(|| ServiceError::validation(MISSING_FIELDS_MESSAGE))?;

        let item = self.store.append(ItemDraft {
            name,
            quantity,
            category: new_item
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            purchased: new_item.purchased.unwrap_or(false),
        });
        tracing::info!(id = item.id, name = %item.name, "created grocery item");
        Ok(item)
    }

    /// Applies `patch` to the item with `id`; omitted fields keep their prior values.
    pub fn update(&mut self, id: u64, patch: ItemPatch) -> Result<GroceryItem, ServiceError> {
        let current = self.store.find(id).ok_or(ServiceError::NotFound)?;
        let patched = patch.apply_to(current);
        let item = self
            .store
            .replace(id, patched)
            .ok_or(ServiceError::NotFound)?;
        tracing::info!(id, purchased = item.purchased, "updated grocery item");
        Ok(item)
    }

    pub fn delete(&mut self, id: u64) -> Result<DeletedItem, ServiceError> {
        let item = self.store.remove(id).ok_or(ServiceError::NotFound)?;
        tracing::info!(id, remaining = self.store.len(), "deleted grocery item");
        Ok(DeletedItem::new(item))
    }
}

impl Default for GroceryService {
    fn default() -> Self {
        Self::new(ItemStore::seeded())
    }
}
