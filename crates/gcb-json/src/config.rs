//! Activation switch for the Cloud Build parser.
//!
//! The parser only exists when `gcb.enabled` is set:
//!
//! ```toml
//! [gcb]
//! enabled = true
//! ```
//!
//! `GCB_ENABLED` in the environment overrides the file.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::parser::GoogleCloudBuildParser;

pub const ENABLED_ENV: &str = "GCB_ENABLED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcbSettings {
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    gcb: GcbSettings,
}

impl GcbSettings {
    /// Reads the `[gcb]` table; a document without one leaves the parser off.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(text)?;
        Ok(file.gcb)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies `GCB_ENABLED` from the process environment, if set.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        let value = std::env::var(ENABLED_ENV).ok();
        self.with_override(value.as_deref())
    }

    pub fn with_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = value else {
            return Ok(self);
        };
        self.enabled = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => {
                return Err(ConfigError::InvalidFlag {
                    name: ENABLED_ENV,
                    value: value.to_owned(),
                })
            }
        };
        Ok(self)
    }

    /// Builds the shared parser when enabled. Hand the returned `Arc` to
    /// every consumer; `None` means Cloud Build support is off.
    pub fn activate(&self) -> Option<Arc<GoogleCloudBuildParser>> {
        if !self.enabled {
            tracing::info!("google cloud build support disabled; parser not created");
            return None;
        }
        let parser = GoogleCloudBuildParser::new();
        tracing::info!("google cloud build parser created");
        tracing::debug!(codec = parser.codec_id(), "parser codec selected");
        Some(Arc::new(parser))
    }
}
