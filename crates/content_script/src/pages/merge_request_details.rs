//! Merge request page: a large button floated to the right of the title.

use crate::shared::components::copy_button::LargeCopyButton;
use crate::shared::copy_action::{CopyAction, CopyContext};
use crate::shared::dom::{self, ContentError};
use contracts::enums::item_kind::ItemKind;
use contracts::shared::item_description::ItemDescription;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const DESCRIPTION_SELECTOR: &str = ".detail-page-description";
const TITLE_SELECTOR: &str = "h2.title";
const TITLE_BLOCK_SELECTOR: &str = ".title";

pub fn setup(document: &Document, url: &str, ctx: &CopyContext) -> Result<(), ContentError> {
    if !url.contains("merge_requests") {
        return Ok(());
    }
    let Some(description) = dom::query_document(document, DESCRIPTION_SELECTOR) else {
        log::debug!("Merge request page without a description block");
        return Ok(());
    };
    if dom::has_copy_button(&description) {
        return Ok(());
    }

    let source = description.clone();
    let action = CopyAction::standalone(ctx, move || describe(&source));
    let icons = ctx.icons.clone();
    dom::mount_first(&description, move || {
        view! {
            <LargeCopyButton
                action=action
                icons=icons
                style="margin-right: 0px; float: right;"
            />
        }
    })?;

    // Keep the title text clear of the floated button
    if let Some(title) = dom::query_optional(&description, TITLE_BLOCK_SELECTOR)
        .and_then(|title| title.dyn_into::<HtmlElement>().ok())
    {
        title.style().set_property("padding-right", "54px")?;
    }
    Ok(())
}

fn describe(description: &Element) -> Result<String, ContentError> {
    let title = dom::text_of(description, TITLE_SELECTOR)?;
    let link = dom::current_url()?;
    Ok(ItemDescription::new(ItemKind::MergeRequest, title, link).to_clipboard_text())
}
