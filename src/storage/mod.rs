pub mod memory;

pub use memory::ItemStore;
