//! Client side of the grocery list.
//!
//! `GroceryApp` keeps a local mirror of the server's items, applies user actions
//! through a `GroceryApi` and re-renders the list markup after every change.
//! Confirmations and alerts go through an injected `Prompt`.

pub mod api;
pub mod app;
pub mod markup;
pub mod prompt;
pub mod view;

pub use api::{GroceryApi, HttpGroceryApi, TransportError};
pub use app::{EditDraft, GroceryApp, ItemForm};
pub use markup::{escape_html, RenderedView};
pub use prompt::{Prompt, TerminalPrompt};
pub use view::{Filter, Mirror, SyncState};
