use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::PackageName;

/// A parsed requirements manifest: named groups of exact pins.
///
/// Manifests are immutable values. Every operation over them (validation,
/// merging, resolution) reads one and returns a new owned result, so a
/// `Manifest` can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    groups: Vec<Group>,
}

/// One named partition of the manifest, e.g. `Testing` or `Documentation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    ordinal: usize,
    entries: Vec<Entry>,
}

/// A single line inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Pin(Pin),
    Editable(EditableMarker),
}

/// `name==version`, optionally flagged as an override for merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    name: PackageName,
    version: String,
    #[serde(default, rename = "override")]
    is_override: bool,
    #[serde(skip)]
    line: usize,
}

/// `-e .[full]`: install the project itself, with extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditableMarker {
    path: String,
    #[serde(default)]
    extras: Vec<String>,
    #[serde(skip)]
    line: usize,
}

impl Manifest {
    /// Build a manifest from groups, renumbering ordinals by position.
    pub fn from_groups(groups: Vec<Group>) -> Self {
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(ordinal, group)| Group { ordinal, ..group })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a group by name, ignoring case.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.is_named(name))
    }

    /// Every pin in source order, paired with the group that owns it.
    pub fn pins(&self) -> impl Iterator<Item = (&Group, &Pin)> {
        self.groups
            .iter()
            .flat_map(|g| g.pins().map(move |p| (g, p)))
    }

    /// Every editable-install marker in source order.
    pub fn editable_markers(&self) -> impl Iterator<Item = (&Group, &EditableMarker)> {
        self.groups.iter().flat_map(|g| {
            g.entries.iter().filter_map(move |e| match e {
                Entry::Editable(m) => Some((g, m)),
                Entry::Pin(_) => None,
            })
        })
    }

    pub fn pin_count(&self) -> usize {
        self.pins().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Render back to manifest text. `parse(render(m)) == m`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

impl Group {
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            ordinal: 0,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the group in its manifest, by first appearance.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Pin(p) => Some(p),
            Entry::Editable(_) => None,
        })
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Pin(p) => write!(f, "{p}"),
            Entry::Editable(m) => write!(f, "{m}"),
        }
    }
}

impl Pin {
    pub fn new(name: impl Into<PackageName>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            is_override: false,
            line: 0,
        }
    }

    pub fn with_override(self, is_override: bool) -> Self {
        Self {
            is_override,
            ..self
        }
    }

    pub fn with_line(self, line: usize) -> Self {
        Self { line, ..self }
    }

    /// The same pin at a different version.
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_override(&self) -> bool {
        self.is_override
    }

    /// 1-based source line, or 0 for pins not read from text.
    pub fn line(&self) -> usize {
        self.line
    }
}

// Source lines are diagnostics only and never part of identity.
impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.name.as_str() == other.name.as_str()
            && self.version == other.version
            && self.is_override == other.is_override
    }
}

impl Eq for Pin {}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)?;
        if self.is_override {
            f.write_str("  # override")?;
        }
        Ok(())
    }
}

impl EditableMarker {
    pub fn new(path: impl Into<String>, extras: Vec<String>) -> Self {
        Self {
            path: path.into(),
            extras,
            line: 0,
        }
    }

    pub fn with_line(self, line: usize) -> Self {
        Self { line, ..self }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// The install target, e.g. `.[full]`.
    pub fn target(&self) -> String {
        if self.extras.is_empty() {
            self.path.clone()
        } else {
            format!("{}[{}]", self.path, self.extras.join(","))
        }
    }
}

impl PartialEq for EditableMarker {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.extras == other.extras
    }
}

impl Eq for EditableMarker {}

impl fmt::Display for EditableMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-e {}", self.target())
    }
}
