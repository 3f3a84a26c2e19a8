//! Resolving files packaged with the extension

use wasm_bindgen::{JsCast, JsValue};

/// Absolute URL of a packaged asset via `chrome.runtime.getURL`.
///
/// Outside an extension context the path is returned unchanged.
pub fn extension_asset_url(path: &str) -> String {
    runtime_get_url(path).unwrap_or_else(|| path.to_string())
}

fn runtime_get_url(path: &str) -> Option<String> {
    let chrome = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("chrome")).ok()?;
    if chrome.is_undefined() {
        return None;
    }
    let runtime = js_sys::Reflect::get(&chrome, &JsValue::from_str("runtime")).ok()?;
    if runtime.is_undefined() {
        return None;
    }
    let get_url = js_sys::Reflect::get(&runtime, &JsValue::from_str("getURL"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    get_url
        .call1(&runtime, &JsValue::from_str(path))
        .ok()?
        .as_string()
}
