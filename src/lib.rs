pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::grocery_service::{GroceryService, ServiceError};
pub use domain::item::{DeletedItem, GroceryItem, ItemPatch, NewItem};
pub use storage::ItemStore;
