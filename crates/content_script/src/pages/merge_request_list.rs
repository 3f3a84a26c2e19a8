//! Merge request list: one pass over the rows present at load time.

use super::{add_inline_buttons, ListLayout};
use crate::shared::copy_action::CopyContext;
use crate::shared::dom::{self, ContentError};
use contracts::enums::item_kind::ItemKind;
use contracts::shared::item_description::ItemDescription;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

const LIST_SELECTOR: &str = ".mr-list";
const LINK_SELECTOR: &str = ".merge-request-title-text a";

const LAYOUT: ListLayout = ListLayout {
    item_selector: ".merge-request",
    button_container_selector: ".merge-request-title",
    describe: describe_merge_request,
};

pub fn setup(document: &Document, ctx: &CopyContext) -> Result<(), ContentError> {
    match dom::query_document(document, LIST_SELECTOR) {
        Some(list) => add_inline_buttons(&list, &LAYOUT, ctx),
        None => log::debug!("No merge request list on this page"),
    }
    Ok(())
}

fn describe_merge_request(row: &Element) -> Result<ItemDescription, ContentError> {
    let link = dom::query(row, LINK_SELECTOR)?;
    let title = link.text_content().unwrap_or_default();
    let href = link
        .dyn_ref::<HtmlAnchorElement>()
        .map(|anchor| anchor.href())
        .ok_or_else(|| ContentError::MissingAttribute {
            selector: LINK_SELECTOR.to_string(),
            attribute: "href".to_string(),
        })?;

    Ok(ItemDescription::new(ItemKind::MergeRequest, title, href))
}
