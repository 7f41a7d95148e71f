//! The client controller: user actions in, server calls out, mirror and view kept
//! in step.
//!
//! Every action that talks to the server follows the same rule: the mirror is only
//! touched after a successful response. A failed call leaves it as it was and raises
//! one alert through the prompt.

use crate::client::api::{GroceryApi, TransportError};
use crate::client::markup::RenderedView;
use crate::client::prompt::Prompt;
use crate::client::view::{Filter, Mirror};
use crate::domain::item::{GroceryItem, ItemPatch, NewItem, DEFAULT_CATEGORY};

pub const LOAD_FAILED: &str = "Failed to load groceries";
pub const NAME_REQUIRED: &str = "Please enter an item name";
pub const ADD_FAILED: &str = "Failed to add grocery item";
pub const UPDATE_FAILED: &str = "Failed to update item";
pub const DELETE_FAILED: &str = "Failed to delete item";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

/// The "add item" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: i64,
    pub category: String,
}

impl ItemForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Contents of the edit modal, pre-filled from the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: u64,
    pub name: String,
    pub quantity: i64,
    pub category: String,
}

impl EditDraft {
    fn from_item(item: &GroceryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            category: item.category.clone(),
        }
    }
}

pub struct GroceryApp<A, P> {
    api: A,
    prompt: P,
    mirror: Mirror,
    filter: Filter,
    form: ItemForm,
    modal: Option<EditDraft>,
    view: RenderedView,
}

impl<A: GroceryApi, P: Prompt> GroceryApp<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        let mut app = Self {
            api,
            prompt,
            mirror: Mirror::new(),
            filter: Filter::All,
            form: ItemForm::default(),
            modal: None,
            view: RenderedView::default(),
        };
        app.render();
        app
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    pub fn modal(&self) -> Option<&EditDraft> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut EditDraft> {
        self.modal.as_mut()
    }

    /// Replaces the mirror with the server's full list. Returns true on success.
    pub async fn load(&mut self) -> bool {
        match self.api.list().await {
            Ok(items) => {
                self.mirror.replace_all(items);
                self.render();
                true
            }
            Err(e) => self.report(LOAD_FAILED, &e),
        }
    }

    /// Switches the filter and re-renders from the mirror without fetching.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.render();
    }

    /// Creates the item described by the form. Clears the form on success.
    pub async fn add(&mut self) -> bool {
        let name = self.form.name.trim().to_string();
        if name.is_empty() {
            self.prompt.alert(NAME_REQUIRED);
            return false;
        }

        let new_item = NewItem::new(name, self.form.quantity)
            .with_category(self.form.category.clone())
            .with_purchased(false);
        match self.api.create(&new_item).await {
            Ok(item) => {
                self.mirror.push(item);
                self.form.clear();
                self.render();
                true
            }
            Err(e) => self.report(ADD_FAILED, &e),
        }
    }

    /// Flips `purchased`, sending every other field as currently mirrored.
    pub async fn toggle_purchased(&mut self, id: u64) -> bool {
        let Some(item) = self.mirror.find(id) else {
            return false;
        };
        let patch = ItemPatch {
            purchased: Some(!item.purchased),
            ..ItemPatch::from_item(item)
        };
        self.apply_update(id, &patch, UPDATE_FAILED).await
    }

    /// Opens the edit modal for a mirrored item.
    pub fn open_edit(&mut self, id: u64) -> bool {
        match self.mirror.find(id) {
            Some(item) => {
                self.modal = Some(EditDraft::from_item(item));
                true
            }
            None => false,
        }
    }

    /// Closes the modal and discards the draft.
    pub fn close_edit(&mut self) {
        self.modal = None;
    }

    /// Sends the draft, keeping the mirrored `purchased` flag. Closes the modal on success.
    pub async fn save_edit(&mut self) -> bool {
        let Some(draft) = self.modal.clone() else {
            return false;
        };
        let Some(current) = self.mirror.find(draft.id) else {
            return false;
        };
        let patch = ItemPatch {
            name: Some(draft.name.trim().to_string()),
            quantity: Some(draft.quantity),
            category: Some(draft.category),
            purchased: Some(current.purchased),
        };
        let saved = self.apply_update(draft.id, &patch, UPDATE_FAILED).await;
        if saved {
            self.close_edit();
        }
        saved
    }

    /// Deletes after confirmation. A declined confirmation sends nothing.
    pub async fn delete(&mut self, id: u64) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return false;
        }
        match self.api.delete(id).await {
            Ok(_) => {
                self.mirror.remove(id);
                self.render();
                true
            }
            Err(e) => self.report(DELETE_FAILED, &e),
        }
    }

    /// Rebuilds the view from the mirror and the active filter.
    pub fn render(&mut self) -> &RenderedView {
        self.view = RenderedView::render(&self.mirror.filtered(self.filter));
        &self.view
    }

    async fn apply_update(&mut self, id: u64, patch: &ItemPatch, failure: &str) -> bool {
        match self.api.update(id, patch).await {
            Ok(item) => {
                self.mirror.replace(item);
                self.render();
                true
            }
            Err(e) => self.report(failure, &e),
        }
    }

    fn report(&mut self, message: &str, error: &TransportError) -> bool {
        tracing::warn!(error = %error, "{}", message);
        self.prompt.alert(message);
        false
    }
}
