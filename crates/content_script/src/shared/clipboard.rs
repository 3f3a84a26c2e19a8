//! Clipboard writes for copy buttons.
//!
//! The structured `navigator.clipboard.write` API is tried first. When it cannot
//! even be invoked (API missing, insecure context) the text goes through a hidden
//! `<textarea>` and `document.execCommand("copy")` instead. A rejected write is
//! final and only reported.

use crate::shared::dom::js_error_message;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard API unavailable: {0}")]
    Unavailable(String),

    #[error("Unable to write to clipboard: {0}")]
    Rejected(String),

    #[error("Fallback copy failed: {0}")]
    Fallback(String),

    #[error("No browser window")]
    NoWindow,
}

/// How the structured clipboard write ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The platform accepted the call but refused the write
    Rejected(ClipboardError),
    /// The call could not be made at all; the legacy path applies
    PrimitiveUnavailable(ClipboardError),
}

/// Platform access used by [`ClipboardWriter`]
pub trait ClipboardBackend {
    /// Submit `content` through the structured clipboard API.
    ///
    /// Synchronous construction failures must resolve to
    /// [`WriteOutcome::PrimitiveUnavailable`] rather than panic.
    fn write_primitive(&self, content: &str) -> LocalBoxFuture<'static, WriteOutcome>;

    /// `execCommand("copy")` route for pages without the structured API
    fn write_legacy(&self, content: &str) -> Result<(), ClipboardError>;
}

/// Anything that takes finished text and puts it on the clipboard.
///
/// Fire-and-forget: implementations report failures themselves.
pub trait ClipboardSink {
    fn write(&self, content: String);
}

#[derive(Clone)]
pub struct ClipboardWriter {
    backend: Rc<dyn ClipboardBackend>,
}

impl ClipboardWriter {
    pub fn new(backend: Rc<dyn ClipboardBackend>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserClipboard))
    }

    /// Write `content`, falling back to the legacy route when the primitive is
    /// unavailable. Errors are logged, never returned.
    pub async fn write_text(&self, content: String) -> WriteOutcome {
        let outcome = self.backend.write_primitive(&content).await;
        match &outcome {
            WriteOutcome::Written => log::debug!("Copied:\n{}", content),
            WriteOutcome::Rejected(err) => log::error!("{}", err),
            WriteOutcome::PrimitiveUnavailable(err) => {
                log::warn!("{}; using execCommand fallback", err);
                match self.backend.write_legacy(&content) {
                    Ok(()) => log::debug!("Fallback: copied:\n{}", content),
                    Err(err) => log::error!("{}", err),
                }
            }
        }
        outcome
    }
}

impl ClipboardSink for ClipboardWriter {
    fn write(&self, content: String) {
        let writer = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            writer.write_text(content).await;
        });
    }
}

/// Runs `cleanup` when dropped, whichever way the scope is left.
pub struct OnDrop<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(cleanup: F) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// `web_sys` implementation of [`ClipboardBackend`]
pub struct BrowserClipboard;

fn unavailable(err: JsValue) -> ClipboardError {
    ClipboardError::Unavailable(js_error_message(&err))
}

fn fallback(err: JsValue) -> ClipboardError {
    ClipboardError::Fallback(js_error_message(&err))
}

/// Look up `target[name]` as a callable
fn method(target: &JsValue, name: &str) -> Result<js_sys::Function, ClipboardError> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(unavailable)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| ClipboardError::Unavailable(format!("{} is not a function", name)))
}

impl BrowserClipboard {
    /// Build a `text/plain` ClipboardItem and hand it to `navigator.clipboard.write`.
    ///
    /// Everything is reached through `Reflect` so a missing API surfaces as an
    /// error instead of a JS exception.
    fn submit(content: &str) -> Result<js_sys::Promise, ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;

        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(unavailable)?;

        let item_class = method(&js_sys::global(), "ClipboardItem")?;
        let record = js_sys::Object::new();
        js_sys::Reflect::set(&record, &JsValue::from_str("text/plain"), &blob)
            .map_err(unavailable)?;
        let item = js_sys::Reflect::construct(&item_class, &js_sys::Array::of1(&record))
            .map_err(unavailable)?;

        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(unavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable(
                "navigator.clipboard is not available".to_string(),
            ));
        }

        method(&clipboard, "write")?
            .call1(&clipboard, &js_sys::Array::of1(&item))
            .map_err(unavailable)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| {
                ClipboardError::Unavailable("clipboard.write did not return a promise".to_string())
            })
    }
}

impl ClipboardBackend for BrowserClipboard {
    fn write_primitive(&self, content: &str) -> LocalBoxFuture<'static, WriteOutcome> {
        match Self::submit(content) {
            Ok(promise) => async move {
                match JsFuture::from(promise).await {
                    Ok(_) => WriteOutcome::Written,
                    Err(err) => {
                        WriteOutcome::Rejected(ClipboardError::Rejected(js_error_message(&err)))
                    }
                }
            }
            .boxed_local(),
            Err(err) => future::ready(WriteOutcome::PrimitiveUnavailable(err)).boxed_local(),
        }
    }

    fn write_legacy(&self, content: &str) -> Result<(), ClipboardError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ClipboardError::NoWindow)?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::Fallback("document has no body".to_string()))?;

        let text_area = document
            .create_element("textarea")
            .map_err(fallback)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Fallback("textarea has an unexpected type".to_string()))?;
        text_area.set_value(content);
        text_area.set_read_only(true);
        let style = text_area.style();
        for (name, value) in [
            ("position", "fixed"),
            ("top", "-9999px"),
            ("left", "-9999px"),
            ("opacity", "0"),
        ] {
            style.set_property(name, value).map_err(fallback)?;
        }

        body.append_child(&text_area).map_err(fallback)?;
        let attached = text_area.clone();
        let _detach = OnDrop::new(move || attached.remove());

        text_area.focus().map_err(fallback)?;
        text_area.select();

        let copied = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClipboardError::Fallback("document is not an HTML document".to_string()))?
            .exec_command("copy")
            .map_err(fallback)?;
        if copied {
            Ok(())
        } else {
            Err(ClipboardError::Fallback(
                "execCommand(\"copy\") was unsuccessful".to_string(),
            ))
        }
    }
}
