//! Package name identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A package name as written in a manifest, compared by its normalized key.
///
/// Identity is case-insensitive and treats runs of `-`, `_` and `.` as a
/// single `-`, so `typing_extensions` and `Typing-Extensions` name the same
/// package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PackageName {
    raw: String,
    key: String,
}

impl PackageName {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = normalize(&raw);
        Self { raw, key }
    }

    /// The name exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized identity key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether `s` is a syntactically valid package name.
    pub fn is_valid(s: &str) -> bool {
        let bytes = s.as_bytes();
        let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && bytes
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    }
}

/// Normalize a package name to its identity key.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                out.push('-');
            }
            in_separator = true;
        } else {
            out.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    out
}

impl PartialEq for PackageName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PackageName {}

impl Hash for PackageName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl From<String> for PackageName {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PackageName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.raw
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
