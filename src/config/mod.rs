//! Project configuration
//!
//! Optional `.ezcp.json` in the working directory. Every field has a default,
//! so an empty object is a valid config. Command-line flags win over values
//! loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EzcpError, Result};
use crate::framework::Framework;
use crate::process::ProcessingOptions;
use crate::selection::SelectionMode;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = ".ezcp.json";

/// Main ezcp configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Processing knobs (tests, custom excludes, size limit)
    #[serde(default)]
    pub processing: ProcessingOptions,

    /// Force a framework instead of detecting one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Initial selection after processing
    #[serde(default)]
    pub selection: SelectionMode,

    /// Write the report here instead of stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location or fall back to defaults.
    ///
    /// A present but invalid file is logged and ignored.
    pub fn load_or_default() -> Self {
        Self::load_or_default_at(DEFAULT_CONFIG_FILE)
    }

    /// Like `load_or_default`, for a config at `path`
    pub fn load_or_default_at<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Reject values that cannot be honored
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.framework {
            if Framework::from_name(name).is_none() {
                return Err(EzcpError::Config(format!(
                    "unknown framework '{}' in config",
                    name
                )));
            }
        }
        Ok(())
    }
}
