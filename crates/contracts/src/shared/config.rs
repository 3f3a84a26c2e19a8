use crate::enums::modifier_key::ModifierKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `localStorage` key an override document is read from
pub const CONFIG_STORAGE_KEY: &str = "gitlab-clipboard.config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime settings of the content script.
///
/// Every field has a default, so an override only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Modifier keys that hold the page in multi-selection mode
    pub tracked_keys: Vec<ModifierKey>,
    /// How long a button shows the "copied" icon
    pub reset_delay_ms: u32,
    /// Joins the items of one aggregated write
    pub separator: String,
    /// `log` level name: error, warn, info, debug or trace
    pub log_level: String,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub copy: String,
    pub copied: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            tracked_keys: ModifierKey::default_tracked(),
            reset_delay_ms: 1000,
            separator: "\n".to_string(),
            log_level: "info".to_string(),
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            copy: "images/copy.svg".to_string(),
            copied: "images/copied.svg".to_string(),
        }
    }
}

impl ExtensionConfig {
    /// Parse an override document on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ExtensionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tracked_keys.is_empty() {
            return Err(ConfigError::Invalid(
                "tracked_keys must name at least one key".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_tracked(&self, key: ModifierKey) -> bool {
        self.tracked_keys.contains(&key)
    }
}

/// Resolve the configuration from an optional stored override.
///
/// A blank override counts as absent.
pub fn load_config(override_json: Option<&str>) -> Result<ExtensionConfig, ConfigError> {
    match override_json.map(str::trim) {
        Some(json) if !json.is_empty() => ExtensionConfig::from_json(json),
        _ => Ok(ExtensionConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config.reset_delay_ms, 1000);
        assert_eq!(config.separator, "\n");
        assert!(config.is_tracked(ModifierKey::ControlLeft));
        assert!(config.is_tracked(ModifierKey::MetaRight));
        assert!(!config.is_tracked(ModifierKey::ShiftLeft));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(r#"{ "reset_delay_ms": 250, "icons": { "copied": "x.svg" } }"#))
            .unwrap();
        assert_eq!(config.reset_delay_ms, 250);
        assert_eq!(config.icons.copied, "x.svg");
        assert_eq!(config.icons.copy, "images/copy.svg");
        assert_eq!(config.tracked_keys, ModifierKey::default_tracked());
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(load_config(Some("  ")).unwrap(), ExtensionConfig::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(load_config(Some("{ not json")).is_err());
        assert!(load_config(Some(r#"{ "tracked_keys": ["KeyC"] }"#)).is_err());
        assert!(load_config(Some(r#"{ "tracked_keys": [] }"#)).is_err());
    }
}
