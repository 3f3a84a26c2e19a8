//! GitLab pages that get copy buttons.
//!
//! Each page module knows its selectors and how to describe its items; the
//! behaviour behind the buttons lives in `shared::copy_action`.

pub mod board;
pub mod issue_details;
pub mod merge_request_details;
pub mod merge_request_list;

use crate::shared::components::copy_button::CopyButton;
use crate::shared::copy_action::{CopyAction, CopyContext};
use crate::shared::dom::{self, ContentError};
use contracts::shared::item_description::ItemDescription;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Reads one item's title and link out of its row
pub type Describe = fn(&Element) -> Result<ItemDescription, ContentError>;

/// Where the buttons of a list of items go
pub struct ListLayout {
    pub item_selector: &'static str,
    pub button_container_selector: &'static str,
    pub describe: Describe,
}

/// Prepend an inline copy button to every item under `items_container` that
/// does not have one yet. Safe to call on every DOM mutation.
pub fn add_inline_buttons(items_container: &Element, layout: &ListLayout, ctx: &CopyContext) {
    let Ok(items) = items_container.query_selector_all(layout.item_selector) else {
        return;
    };

    for index in 0..items.length() {
        let Some(item) = items
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(container) = dom::query_optional(&item, layout.button_container_selector) else {
            continue;
        };
        if dom::has_copy_button(&container) {
            continue;
        }

        let describe = layout.describe;
        let action = CopyAction::new(ctx, move || Ok(describe(&item)?.to_clipboard_text()));
        let icons = ctx.icons.clone();
        if let Err(err) = dom::mount_first(&container, move || {
            view! { <CopyButton action=action icons=icons /> }
        }) {
            log::error!("Failed to add copy button: {}", err);
        }
    }
}
