//! The resolved environment: a validated manifest flattened into
//! package→version mappings, partitioned by group for selective installs.

use std::collections::BTreeMap;

use pinset_core::lockfile::{LockedGroup, LockedPackage, Lockfile};
use pinset_core::Manifest;
use pinset_util::errors::PinsetError;
use serde::Serialize;

use crate::problem::ProblemReport;
use crate::validate::{validate_with, ValidateOptions};

/// A conflict-free environment ready for an installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub editable: Option<ResolvedEditable>,
    pub groups: Vec<ResolvedGroup>,
}

/// The project itself, installed in editable mode from one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEditable {
    pub group: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedGroup {
    pub name: String,
    /// Packages in manifest order.
    pub packages: Vec<ResolvedPackage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
}

/// Validate `manifest` and build its environment.
pub fn resolve(manifest: &Manifest, options: &ValidateOptions) -> Result<Environment, ProblemReport> {
    validate_with(manifest, options)?;

    let editable = manifest
        .editable_markers()
        .next()
        .map(|(group, marker)| ResolvedEditable {
            group: group.name().to_string(),
            target: marker.target(),
        });

    let groups = manifest
        .groups()
        .iter()
        .map(|group| ResolvedGroup {
            name: group.name().to_string(),
            packages: group
                .pins()
                .map(|pin| ResolvedPackage {
                    name: pin.name().to_string(),
                    version: pin.version().to_string(),
                })
                .collect(),
        })
        .collect();

    Ok(Environment { editable, groups })
}

impl Environment {
    /// Look up a group by name, ignoring case.
    pub fn group(&self, name: &str) -> Option<&ResolvedGroup> {
        let wanted = name.trim().to_lowercase();
        self.groups.iter().find(|g| g.name.to_lowercase() == wanted)
    }

    pub fn package_count(&self) -> usize {
        self.groups.iter().map(|g| g.packages.len()).sum()
    }

    /// Resolve group names to groups; an empty selection means every group.
    fn selected<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&ResolvedGroup>, PinsetError> {
        if names.is_empty() {
            return Ok(self.groups.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.group(name.as_ref()).ok_or_else(|| PinsetError::Resolution {
                    message: format!(
                        "unknown group '{}' (available: {})",
                        name.as_ref(),
                        self.groups
                            .iter()
                            .map(|g| g.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })
            })
            .collect()
    }

    /// Flattened mapping for the chosen groups, keyed by normalized name.
    pub fn select<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, ResolvedPackage>, PinsetError> {
        let mut out = BTreeMap::new();
        for group in self.selected(names)? {
            for package in &group.packages {
                out.entry(pinset_core::name::normalize(&package.name))
                    .or_insert_with(|| package.clone());
            }
        }
        Ok(out)
    }

    /// Render the chosen groups as a flat, installable requirements list.
    ///
    /// The editable marker is included when its group is selected.
    pub fn to_requirements<S: AsRef<str>>(&self, names: &[S]) -> Result<String, PinsetError> {
        let groups = self.selected(names)?;
        let mut out = String::new();
        if let Some(editable) = &self.editable {
            if groups
                .iter()
                .any(|g| g.name.eq_ignore_ascii_case(&editable.group))
            {
                out.push_str(&format!("-e {}\n", editable.target));
            }
        }
        for package in self.select(names)?.values() {
            out.push_str(&format!("{}=={}\n", package.name, package.version));
        }
        Ok(out)
    }

    /// Lockfile for this environment, stamped with the manifest's checksum.
    pub fn to_lockfile(&self, source: &str, manifest_text: &str) -> Lockfile {
        let groups = self
            .groups
            .iter()
            .map(|g| LockedGroup {
                name: g.name.clone(),
                packages: g
                    .packages
                    .iter()
                    .map(|p| LockedPackage {
                        name: p.name.clone(),
                        version: p.version.clone(),
                    })
                    .collect(),
            })
            .collect();
        Lockfile::new(
            source,
            manifest_text,
            self.editable.as_ref().map(|e| e.target.clone()),
            groups,
        )
    }
}
