use serde::{Deserialize, Serialize};
use std::path::Path;

use pinset_util::errors::PinsetError;
use pinset_util::hash::manifest_checksum;

/// Resolved environment recorded next to the manifest, partitioned by group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    /// File name of the manifest this lock was produced from.
    pub source: String,
    /// SHA-256 of the manifest text at lock time.
    pub checksum: String,
    /// Install target of the editable marker, e.g. `.[full]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<String>,
    #[serde(default, rename = "group")]
    pub groups: Vec<LockedGroup>,
}

/// One group of locked packages, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedGroup {
    pub name: String,
    #[serde(default, rename = "package")]
    pub packages: Vec<LockedPackage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
}

impl Lockfile {
    /// Create a lockfile for `manifest_text`, recording its checksum.
    pub fn new(
        source: impl Into<String>,
        manifest_text: &str,
        editable: Option<String>,
        groups: Vec<LockedGroup>,
    ) -> Self {
        Self {
            source: source.into(),
            checksum: manifest_checksum(manifest_text),
            editable,
            groups,
        }
    }

    /// Load and parse a `pinset.lock` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PinsetError::Lockfile {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            PinsetError::Lockfile {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Serialize the lockfile to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write the lockfile to `path`.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        let content = self.to_string_pretty().map_err(|e| PinsetError::Lockfile {
            message: format!("Failed to serialize lockfile: {e}"),
        })?;
        pinset_util::fs::write_file(path, &content)?;
        Ok(())
    }

    /// Whether this lock was produced from exactly `manifest_text`.
    pub fn is_fresh(&self, manifest_text: &str) -> bool {
        self.checksum == manifest_checksum(manifest_text)
    }
}
