//! Page-supplied configuration.
//!
//! The host page may embed
//!
//! ```html
//! <script id="memory-room-config" type="application/json">
//!   { "base_path": "/static/room/", "reveal_interval_ms": 900 }
//! </script>
//! ```
//!
//! Missing fields take their defaults. A missing element means all defaults;
//! a malformed one is logged and also falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "memory-room-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reveal_interval_ms must be positive, got {0}")]
    Interval(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Prefix for scene backgrounds and discovery images.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Delay between story intro lines.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: f64,
}

fn default_base_path() -> String {
    "assets/".to_string()
}

fn default_reveal_interval_ms() -> f64 {
    1200.0
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            reveal_interval_ms: default_reveal_interval_ms(),
        }
    }
}

impl AssetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AssetConfig = serde_json::from_str(json)?;
        if config.reveal_interval_ms <= 0.0 {
            return Err(ConfigError::Interval(config.reveal_interval_ms));
        }
        Ok(config)
    }

    /// Path of an asset file under the configured base.
    pub fn asset_path(&self, file: &str) -> String {
        if self.base_path.is_empty() || self.base_path.ends_with('/') {
            format!("{}{}", self.base_path, file)
        } else {
            format!("{}/{}", self.base_path, file)
        }
    }

    /// Read the config element from the current document.
    pub fn load() -> Self {
        let Some(json) = config_element_text() else {
            tracing::debug!("no config element, using defaults");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => {
                tracing::debug!(?config, "config loaded");
                config
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring page config");
                Self::default()
            }
        }
    }
}

fn config_element_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AssetConfig::from_json("{}").unwrap(), AssetConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = AssetConfig::from_json(r#"{"base_path": "/cdn/room"}"#).unwrap();
        assert_eq!(config.base_path, "/cdn/room");
        assert_eq!(config.reveal_interval_ms, 1200.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AssetConfig::from_json("{base_path:").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn non_positive_interval_rejected() {
        let err = AssetConfig::from_json(r#"{"reveal_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Interval(_)));
    }

    #[test]
    fn asset_path_joins_with_one_slash() {
        let mut config = AssetConfig::default();
        assert_eq!(config.asset_path("desk.jpg"), "assets/desk.jpg");
        config.base_path = "/static".into();
        assert_eq!(config.asset_path("desk.jpg"), "/static/desk.jpg");
        config.base_path = String::new();
        assert_eq!(config.asset_path("desk.jpg"), "desk.jpg");
    }
}
