//! Issue page: a large button in the header actions, next to "Edit".

use crate::shared::components::copy_button::LargeCopyButton;
use crate::shared::copy_action::{CopyAction, CopyContext};
use crate::shared::dom::{self, ContentError};
use contracts::enums::item_kind::ItemKind;
use contracts::shared::item_description::ItemDescription;
use leptos::prelude::*;
use web_sys::{Document, Element, Node};

const DESCRIPTION_SELECTOR: &str = ".detail-page-description";
const ACTIONS_SELECTOR: &str = ".detail-page-header-actions";
const EDIT_BUTTON_SELECTOR: &str = ".js-issuable-edit";
const TITLE_SELECTOR: &str = "h1.title";

pub fn setup(document: &Document, url: &str, ctx: &CopyContext) -> Result<(), ContentError> {
    if !url.contains("issues") {
        return Ok(());
    }
    let Some(description) = dom::query_document(document, DESCRIPTION_SELECTOR) else {
        log::debug!("Issue page without a description block");
        return Ok(());
    };

    add_button(&description, ctx);

    let observed = description.clone();
    let ctx = ctx.clone();
    dom::observe_subtree(&description, move || add_button(&observed, &ctx))
}

fn add_button(description: &Element, ctx: &CopyContext) {
    let Some(actions) = dom::query_optional(description, ACTIONS_SELECTOR) else {
        return;
    };
    if dom::has_copy_button(&actions) {
        return;
    }

    // insertBefore needs a direct child as reference
    let actions_node: &Node = &actions;
    let edit_button = dom::query_optional(&actions, EDIT_BUTTON_SELECTOR).filter(|edit| {
        edit.parent_node()
            .is_some_and(|parent| parent.is_same_node(Some(actions_node)))
    });

    let source = description.clone();
    let action = CopyAction::standalone(ctx, move || describe(&source));
    let icons = ctx.icons.clone();
    let mounted = dom::mount_before(&actions, edit_button.as_deref(), move || {
        view! { <LargeCopyButton action=action icons=icons /> }
    });
    if let Err(err) = mounted {
        log::error!("Failed to add issue copy button: {}", err);
    }
}

fn describe(description: &Element) -> Result<String, ContentError> {
    let title = dom::text_of(description, TITLE_SELECTOR)?;
    let link = dom::current_url()?;
    Ok(ItemDescription::new(ItemKind::Issue, title, link).to_clipboard_text())
}
