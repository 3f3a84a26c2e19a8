use super::SelectionController;
use crate::shared::dom::ContentError;
use contracts::enums::modifier_key::ModifierKey;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// The tracked modifier behind a `KeyboardEvent.code`, if it is one
pub fn tracked_key(code: &str, tracked: &[ModifierKey]) -> Option<ModifierKey> {
    ModifierKey::from_code(code).filter(|key| tracked.contains(key))
}

/// Forward tracked modifier presses and releases on `document` to `controller`.
///
/// The listeners stay attached for the lifetime of the page.
pub fn observe_modifier_keys(
    document: &Document,
    controller: Rc<SelectionController>,
    tracked: Vec<ModifierKey>,
) -> Result<(), ContentError> {
    let tracked = Rc::new(tracked);

    let on_key_down = {
        let controller = Rc::clone(&controller);
        let tracked = Rc::clone(&tracked);
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|event| tracked_key(&event.code(), &tracked))
            {
                controller.modifier_key_down(key);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_key_up = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|event| tracked_key(&event.code(), &tracked))
        {
            controller.modifier_key_up(key);
        }
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_down.forget();
    on_key_up.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_modifier_is_tracked() {
        let tracked = ModifierKey::default_tracked();
        for code in ["ControlLeft", "ControlRight", "MetaLeft", "MetaRight"] {
            assert!(tracked_key(code, &tracked).is_some(), "{} not tracked", code);
        }
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let tracked = ModifierKey::default_tracked();
        assert_eq!(tracked_key("KeyC", &tracked), None);
        assert_eq!(tracked_key("ShiftLeft", &tracked), None);
        assert_eq!(tracked_key("", &tracked), None);
    }

    #[test]
    fn test_configured_subset() {
        let tracked = vec![ModifierKey::AltLeft];
        assert_eq!(tracked_key("AltLeft", &tracked), Some(ModifierKey::AltLeft));
        assert_eq!(tracked_key("ControlLeft", &tracked), None);
    }
}
