use serde::{Deserialize, Serialize};

/// Modifier keys that can hold the page in multi-selection mode.
///
/// Variants are named after `KeyboardEvent.code`, so the serialized form is the
/// same string the browser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    ControlLeft,
    ControlRight,
    MetaLeft,
    MetaRight,
    AltLeft,
    AltRight,
    ShiftLeft,
    ShiftRight,
}

impl ModifierKey {
    /// `KeyboardEvent.code` value for this key
    pub fn code(&self) -> &'static str {
        match self {
            ModifierKey::ControlLeft => "ControlLeft",
            ModifierKey::ControlRight => "ControlRight",
            ModifierKey::MetaLeft => "MetaLeft",
            ModifierKey::MetaRight => "MetaRight",
            ModifierKey::AltLeft => "AltLeft",
            ModifierKey::AltRight => "AltRight",
            ModifierKey::ShiftLeft => "ShiftLeft",
            ModifierKey::ShiftRight => "ShiftRight",
        }
    }

    /// Parse a `KeyboardEvent.code`; anything that is not a modifier yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ControlLeft" => Some(ModifierKey::ControlLeft),
            "ControlRight" => Some(ModifierKey::ControlRight),
            "MetaLeft" => Some(ModifierKey::MetaLeft),
            "MetaRight" => Some(ModifierKey::MetaRight),
            "AltLeft" => Some(ModifierKey::AltLeft),
            "AltRight" => Some(ModifierKey::AltRight),
            "ShiftLeft" => Some(ModifierKey::ShiftLeft),
            "ShiftRight" => Some(ModifierKey::ShiftRight),
            _ => None,
        }
    }

    /// Keys tracked when the configuration does not say otherwise:
    /// both Control keys (Windows/Linux) and both Command keys (macOS).
    pub fn default_tracked() -> Vec<ModifierKey> {
        vec![
            ModifierKey::ControlLeft,
            ModifierKey::ControlRight,
            ModifierKey::MetaLeft,
            ModifierKey::MetaRight,
        ]
    }
}

impl std::fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_parses_back() {
        for key in [
            ModifierKey::ControlLeft,
            ModifierKey::MetaRight,
            ModifierKey::ShiftLeft,
        ] {
            assert_eq!(ModifierKey::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn test_non_modifier_codes_are_rejected() {
        assert_eq!(ModifierKey::from_code("KeyC"), None);
        assert_eq!(ModifierKey::from_code("Control"), None);
        assert_eq!(ModifierKey::from_code(""), None);
    }

    #[test]
    fn test_serialized_form_matches_code() {
        let json = serde_json::to_string(&ModifierKey::MetaLeft).unwrap();
        assert_eq!(json, "\"MetaLeft\"");
    }
}
