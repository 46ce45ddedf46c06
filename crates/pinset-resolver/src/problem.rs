//! Problems found in a manifest and the report that collects them.

use miette::Diagnostic;
use pinset_core::VersionError;
use thiserror::Error;

/// A single defect in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Problem {
    /// The same package appears twice inside one group.
    #[error("'{package}' is pinned twice in group '{group}' ({first} and {second})")]
    #[diagnostic(
        code(pinset::duplicate_in_group),
        help("Keep a single pin per package in each group")
    )]
    DuplicateInGroup {
        group: String,
        package: String,
        first: String,
        second: String,
    },

    /// The same package is pinned to different versions in two groups.
    #[error(
        "'{package}' is pinned to {first_version} in '{first_group}' but to {second_version} in '{second_group}'"
    )]
    #[diagnostic(
        code(pinset::cross_group_conflict),
        help("Pin the same version everywhere, or mark the later pin `# override` when merging")
    )]
    CrossGroupConflict {
        package: String,
        first_group: String,
        first_version: String,
        second_group: String,
        second_version: String,
    },

    /// A pin that does not name one exact release.
    #[error("'{package}=={version}' in group '{group}' is not an exact version: {reason}")]
    #[diagnostic(code(pinset::malformed_version))]
    MalformedVersion {
        group: String,
        package: String,
        version: String,
        reason: VersionError,
    },

    /// More than one `-e` marker in the manifest.
    #[error(
        "{count} editable-install markers found (groups: {}); at most one is allowed",
        .groups.join(", ")
    )]
    #[diagnostic(code(pinset::multiple_editable_markers))]
    MultipleEditableMarkers {
        count: usize,
        groups: Vec<String>,
        lines: Vec<usize>,
    },
}

impl Problem {
    /// The package the problem is about, if any.
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::DuplicateInGroup { package, .. }
            | Self::CrossGroupConflict { package, .. }
            | Self::MalformedVersion { package, .. } => Some(package),
            Self::MultipleEditableMarkers { .. } => None,
        }
    }
}

/// Every problem found in one pass, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Diagnostic)]
#[error("{}", summary(.problems))]
#[diagnostic(
    code(pinset::invalid_manifest),
    help("Fix the manifest by hand; pinset never picks a version for you")
)]
pub struct ProblemReport {
    #[related]
    problems: Vec<Problem>,
}

fn summary(problems: &[Problem]) -> String {
    match problems.len() {
        1 => "1 problem found in manifest".to_string(),
        n => format!("{n} problems found in manifest"),
    }
}

impl ProblemReport {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// `Ok(())` when `problems` is empty, the report otherwise.
    pub fn into_result(problems: Vec<Problem>) -> Result<(), Self> {
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Self::new(problems))
        }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }
}
