use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pinset_util::errors::PinsetError;

use crate::version::VersionPolicy;

/// Global user configuration loaded from `~/.pinset/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Manifest file name used when `--manifest` is not given.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub validate: ValidateConfig,

    #[serde(default)]
    pub lock: LockConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            validate: ValidateConfig::default(),
            lock: LockConfig::default(),
        }
    }
}

fn default_manifest() -> String {
    crate::DEFAULT_MANIFEST_NAME.to_string()
}

/// Validation settings from `[validate]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Accept `MAJOR.MINOR` pins in addition to `MAJOR.MINOR.PATCH`.
    #[serde(default, rename = "allow-short-versions")]
    pub allow_short_versions: bool,
}

impl ValidateConfig {
    pub fn version_policy(&self) -> VersionPolicy {
        VersionPolicy {
            allow_short: self.allow_short_versions,
        }
    }
}

/// Lockfile settings from `[lock]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    #[serde(default = "default_lock_file")]
    pub file: String,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            file: default_lock_file(),
        }
    }
}

fn default_lock_file() -> String {
    crate::DEFAULT_LOCKFILE_NAME.to_string()
}

impl GlobalConfig {
    /// Load the global configuration from `~/.pinset/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PinsetError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            PinsetError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the pinset data directory (`~/.pinset/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".pinset")
}
