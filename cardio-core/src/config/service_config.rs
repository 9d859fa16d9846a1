use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Service startup configuration.
///
/// Read once before the first request; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name of the built-in feature profile to serve with.
    pub profile: String,
    /// Ordered model load candidates; the first existing path wins.
    pub model_paths: Vec<PathBuf>,
    /// Feature count the model file was exported with. Checked against
    /// the active profile at load time.
    pub model_features: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            profile: defaults::DEFAULT_PROFILE.to_string(),
            model_paths: defaults::default_model_paths(),
            model_features: defaults::DEFAULT_MODEL_FEATURES,
        }
    }
}

impl ServiceConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })
    }

    /// Load a config file, falling back to defaults for absent keys.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}
