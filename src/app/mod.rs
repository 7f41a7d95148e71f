pub mod grocery_service;

pub use grocery_service::{GroceryService, ServiceError};
