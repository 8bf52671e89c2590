//! Application configuration.
//!
//! Compiled defaults, optionally overridden by a JSON file named in the
//! `BMI_CONFIG` environment variable. Every field may be omitted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bmi_shared::form::DEFAULT_FALLBACK_NAME;

use crate::error::ConfigError;

/// Environment variable pointing at an optional JSON config file.
pub const CONFIG_ENV: &str = "BMI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub window_x: f32,
    pub window_y: f32,
    /// Shown in the result when the name field is left empty.
    pub fallback_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "BMI Calculator".to_owned(),
            window_width: 480.0,
            window_height: 420.0,
            window_x: 100.0,
            window_y: 100.0,
            fallback_name: DEFAULT_FALLBACK_NAME.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load from `$BMI_CONFIG` if set, otherwise use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => {
                tracing::debug!("{CONFIG_ENV} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
