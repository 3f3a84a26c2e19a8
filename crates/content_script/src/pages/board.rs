//! Issue board: a button on every card, re-applied as GitLab renders cards lazily.

use super::{add_inline_buttons, ListLayout};
use crate::shared::copy_action::CopyContext;
use crate::shared::dom::{self, ContentError};
use contracts::enums::item_kind::ItemKind;
use contracts::shared::item_description::ItemDescription;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

const BOARD_SELECTOR: &str = ".boards-list";
const CARD_LINK_SELECTOR: &str = ".board-card-title a";

const LAYOUT: ListLayout = ListLayout {
    item_selector: ".board-card",
    button_container_selector: ".gl-flex",
    describe: describe_card,
};

pub fn setup(document: &Document, ctx: &CopyContext) -> Result<(), ContentError> {
    let Some(board) = dom::query_document(document, BOARD_SELECTOR) else {
        log::debug!("No issue board on this page");
        return Ok(());
    };

    add_inline_buttons(&board, &LAYOUT, ctx);

    let observed = board.clone();
    let ctx = ctx.clone();
    dom::observe_subtree(&board, move || add_inline_buttons(&observed, &LAYOUT, &ctx))
}

fn describe_card(card: &Element) -> Result<ItemDescription, ContentError> {
    let link = dom::query(card, CARD_LINK_SELECTOR)?;
    let title = link
        .get_attribute("title")
        .ok_or_else(|| ContentError::MissingAttribute {
            selector: CARD_LINK_SELECTOR.to_string(),
            attribute: "title".to_string(),
        })?;
    let href = link
        .dyn_ref::<HtmlAnchorElement>()
        .map(|anchor| anchor.href())
        .ok_or_else(|| ContentError::MissingAttribute {
            selector: CARD_LINK_SELECTOR.to_string(),
            attribute: "href".to_string(),
        })?;

    Ok(ItemDescription::new(ItemKind::Issue, title, href))
}
