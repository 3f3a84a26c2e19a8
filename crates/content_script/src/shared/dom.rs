//! Small helpers over `web_sys` for reading and patching the host page.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MutationObserver, MutationObserverInit, Node};

/// Class every injected copy button carries; used to avoid injecting twice.
pub const COPY_BUTTON_CLASS: &str = "clipboard-btn";

/// Failure to read or patch the host page
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Attribute `{attribute}` missing on `{selector}`")]
    MissingAttribute { selector: String, attribute: String },

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for ContentError {
    fn from(value: JsValue) -> Self {
        ContentError::Dom(js_error_message(&value))
    }
}

/// Best-effort readable form of a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

pub fn document() -> Result<Document, ContentError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ContentError::MissingElement("document".to_string()))
}

pub fn current_url() -> Result<String, ContentError> {
    let window =
        web_sys::window().ok_or_else(|| ContentError::MissingElement("window".to_string()))?;
    Ok(window.location().href()?)
}

/// First element under `parent` matching `selector`, or `MissingElement`.
pub fn query(parent: &Element, selector: &str) -> Result<Element, ContentError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| ContentError::MissingElement(selector.to_string()))
}

/// Same as [`query`], for lookups where absence is a normal page state.
pub fn query_optional(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn query_document(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn text_of(parent: &Element, selector: &str) -> Result<String, ContentError> {
    Ok(query(parent, selector)?
        .text_content()
        .unwrap_or_default()
        .trim()
        .to_string())
}

pub fn has_copy_button(container: &Element) -> bool {
    query_optional(container, &format!(".{}", COPY_BUTTON_CLASS)).is_some()
}

/// Mount a view into a fresh host node inserted into `container` before `before`
/// (appended when `None`).
///
/// The host page owns the surrounding markup and may drop it at any time, so the
/// mounted view is leaked instead of being tied to an owner.
pub fn mount_before<F, N>(
    container: &Element,
    before: Option<&Node>,
    view: F,
) -> Result<(), ContentError>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = document()?;
    let host = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ContentError::Dom("span is not an HtmlElement".to_string()))?;
    host.style().set_property("display", "contents")?;
    container.insert_before(&host, before)?;
    leptos::mount::mount_to(host, view).forget();
    Ok(())
}

/// Mount a view as the first child of `container`
pub fn mount_first<F, N>(container: &Element, view: F) -> Result<(), ContentError>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let first = container.first_child();
    mount_before(container, first.as_ref(), view)
}

/// Run `on_change` whenever nodes are added or removed anywhere under `target`.
///
/// The observer lives as long as the page; its closure is leaked on purpose.
pub fn observe_subtree<F>(target: &Element, mut on_change: F) -> Result<(), ContentError>
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
        on_change();
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_attributes(false);
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(target, &options)?;

    callback.forget();
    Ok(())
}
