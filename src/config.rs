//! Widget configuration
//!
//! Read once at startup. On the web it comes from an inline JSON block:
//! `<script type="application/json" id="my-selections-config">{...}</script>`.
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Widget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Storage key holding the selected ids
    pub storage_key: String,
    /// Namespace scoping storage keys as `namespace.key`; empty means unscoped
    pub namespace: String,
    /// Heading shown above the list
    pub heading: String,
    /// Label of the reset button
    pub reset_label: String,
    /// Id of the element the widget renders into
    pub mount_id: String,
    /// Write the derived selection back to storage on mount
    pub echo_on_mount: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: crate::consts::STORAGE_KEY.to_string(),
            namespace: String::new(),
            heading: crate::consts::HEADING.to_string(),
            reset_label: crate::consts::RESET_LABEL.to_string(),
            mount_id: "app".to_string(),
            echo_on_mount: true,
        }
    }
}

impl WidgetConfig {
    /// Id of the inline config element
    pub const CONFIG_ELEMENT_ID: &'static str = "my-selections-config";

    /// Parse from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid widget config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded widget config from page");
                Self::from_json(&json)
            }
            _ => {
                log::info!("Using default widget config");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_key, "selectedOptions");
        assert_eq!(config.heading, "MY SELECTIONS");
        assert!(config.namespace.is_empty());
        assert!(config.echo_on_mount);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"namespace":"pets."}"#);
        assert_eq!(config.namespace, "pets.");
        assert_eq!(config.storage_key, "selectedOptions");
        assert_eq!(config.reset_label, "Reset");
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(WidgetConfig::from_json("{"), WidgetConfig::default());
    }
}
