use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Project-level configuration, loaded from `.passkeep.toml`.
///
/// Every field has a sensible default so PassKeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) holding the store file.
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// File name of the password store inside `store_dir`.
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_store_dir() -> String {
    ".passkeep".to_string()
}

fn default_store_file() -> String {
    "passwords.store".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            store_file: default_store_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passkeep.toml";

    /// Load settings from `<dir>/.passkeep.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the store file.
    ///
    /// Example: `dir/.passkeep/passwords.store`
    pub fn store_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.store_dir).join(&self.store_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
