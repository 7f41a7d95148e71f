//! Domain types shared by the service, the HTTP layer and the client.

pub mod item;

pub use item::{DeletedItem, GroceryItem, ItemDraft, ItemPatch, NewItem, DEFAULT_CATEGORY};
