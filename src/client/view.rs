//! Local mirror of the server's items and the status filter applied when rendering.

use crate::domain::item::GroceryItem;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Not yet purchased.
    Active,
    Purchased,
}

impl Filter {
    pub fn matches(self, item: &GroceryItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.purchased,
            Filter::Purchased => item.purchased,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Purchased => "purchased",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected all, active or purchased)")]
pub struct UnknownFilter(String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "purchased" => Ok(Filter::Purchased),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Nothing loaded yet.
    Stale,
    /// Matches the last successful load or mutation.
    Synced,
}

/// Client-side copy of the item sequence. Only ever changed after a successful call.
#[derive(Debug, Clone)]
pub struct Mirror {
    items: Vec<GroceryItem>,
    state: SyncState,
}

impl Mirror {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: SyncState::Stale,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn find(&self, id: u64) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn replace_all(&mut self, items: Vec<GroceryItem>) {
        self.items = items;
        self.state = SyncState::Synced;
    }

    pub fn push(&mut self, item: GroceryItem) {
        self.items.push(item);
        self.state = SyncState::Synced;
    }

    /// Swaps in the server's copy of an item. Returns false if the id is not mirrored.
    pub fn replace(&mut self, item: GroceryItem) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                self.state = SyncState::Synced;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
        self.state = SyncState::Synced;
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&GroceryItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}
