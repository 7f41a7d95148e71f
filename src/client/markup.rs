//! HTML rendering of the (filtered) list.
//!
//! Every piece of user text goes through `escape_html` before it reaches the markup.

use crate::domain::item::GroceryItem;
use std::fmt::Write;

pub const EMPTY_STATE_HTML: &str =
    r#"<div id="emptyState" class="empty-state show"><p>No grocery items to show.</p></div>"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The result of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    /// Markup of the visible items, in mirror order. Empty when nothing matches.
    pub items_html: String,
    /// Ids of the visible items.
    pub visible_ids: Vec<u64>,
    pub show_empty_state: bool,
}

impl RenderedView {
    pub fn render(items: &[&GroceryItem]) -> Self {
        if items.is_empty() {
            return Self {
                items_html: String::new(),
                visible_ids: Vec::new(),
                show_empty_state: true,
            };
        }

        let mut items_html = String::new();
        for item in items {
            render_item(&mut items_html, item);
        }
        Self {
            items_html,
            visible_ids: items.iter().map(|item| item.id).collect(),
            show_empty_state: false,
        }
    }

    /// The list container, or the empty-state indicator when nothing is visible.
    pub fn to_html(&self) -> String {
        if self.show_empty_state {
            return EMPTY_STATE_HTML.to_string();
        }
        format!(r#"<div id="groceryItems">{}</div>"#, self.items_html)
    }
}

fn render_item(out: &mut String, item: &GroceryItem) {
    let purchased_class = if item.purchased { " purchased" } else { "" };
    let checked = if item.purchased { " checked" } else { "" };
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        concat!(
            r#"<div class="grocery-item{purchased_class}" data-id="{id}">"#,
            r#"<div class="item-left">"#,
            r#"<input type="checkbox" class="checkbox" data-action="toggle" data-id="{id}"{checked}>"#,
            r#"<div class="item-info"><h3>{name}</h3>"#,
            r#"<div class="item-details"><span>Qty: {quantity}</span>"#,
            r#"<span class="category-badge">{category}</span></div></div></div>"#,
            r#"<div class="item-actions">"#,
            r#"<button class="btn btn-edit" data-action="edit" data-id="{id}">Edit</button>"#,
            r#"<button class="btn btn-delete" data-action="delete" data-id="{id}">Delete</button>"#,
            r#"</div></div>"#,
        ),
        purchased_class = purchased_class,
        id = item.id,
        checked = checked,
        name = escape_html(&item.name),
        quantity = item.quantity,
        category = escape_html(&item.category),
    );
}
