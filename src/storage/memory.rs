//! In-memory item store: the ordered item sequence plus the next-id counter.
//!
//! The store is not synchronized. It is owned by `GroceryService`, which the HTTP
//! layer keeps behind a single mutex.

use crate::domain::item::{GroceryItem, ItemDraft};

// --- Starter list ---
const SEED: &[(&str, i64, &str, bool)] = &[
    ("Milk", 2, "Dairy", false),
    ("Bread", 1, "Bakery", false),
    ("Eggs", 12, "Dairy", true),
];

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<GroceryItem>,
    next_id: u64,
}

impl ItemStore {
    /// Creates an empty store whose first item will get id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the three starter items (ids 1-3, next id 4).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, quantity, category, purchased) in SEED {
            store.append(ItemDraft {
                name: (*name).to_string(),
                quantity: *quantity,
                category: (*category).to_string(),
                purchased: *purchased,
            });
        }
        store
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next appended item will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn find(&self, id: u64) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Assigns the next id to `draft`, appends it and returns the stored item.
    pub fn append(&mut self, draft: ItemDraft) -> GroceryItem {
        let item = draft.into_item(self.next_id);
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Replaces the item with `id` in place, keeping its position and its id.
    /// Returns the stored value, or `None` if no item has that id.
    pub fn replace(&mut self, id: u64, item: GroceryItem) -> Option<GroceryItem> {
        let index = self.position(id)?;
        let slot = &mut self.items[index];
        *slot = GroceryItem { id, ..item };
        Some(slot.clone())
    }

    /// Excises the item with `id` from the sequence.
    pub fn remove(&mut self, id: u64) -> Option<GroceryItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
