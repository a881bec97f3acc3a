//! Settings stored alongside a vault.
//!
//! Loaded from TOML. Keys missing from the file keep their defaults, so a
//! file written by an older version still loads.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JstampError, Result};

/// Per-vault settings. Owned by the caller and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Free-form user setting. Not read by the inserter.
    pub setting: String,

    /// Log level for the command-line host (`error` through `trace`).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            setting: "default".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Io`] if the file exists but cannot be read.
    /// Returns [`JstampError::Config`] if it is not valid settings TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&raw).map_err(|e| JstampError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Config`] if `raw` is not valid settings TOML.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| JstampError::Config(e.to_string()))
    }

    /// Render settings as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Serialization`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| JstampError::Serialization(e.to_string()))
    }

    /// Write settings to `path`, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
