//! Manifest validation.
//!
//! Checks run in a fixed order and every finding is collected:
//! 1. duplicate names inside a group
//! 2. the same name pinned to different versions in different groups
//! 3. versions that are not exact pins
//! 4. more than one editable-install marker

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;

use pinset_core::{ExactVersion, Group, Manifest, Pin, VersionPolicy};

use crate::problem::{Problem, ProblemReport};

/// `Ok(())` for a clean manifest, otherwise every problem found.
pub type ValidationResult = Result<(), ProblemReport>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub versions: VersionPolicy,
}

/// Validate with the strict default policy.
pub fn validate(manifest: &Manifest) -> ValidationResult {
    validate_with(manifest, &ValidateOptions::default())
}

pub fn validate_with(manifest: &Manifest, options: &ValidateOptions) -> ValidationResult {
    let mut problems = Vec::new();

    let firsts = check_duplicates(manifest, &mut problems);
    check_cross_group(&firsts, &mut problems);
    check_versions(manifest, &options.versions, &mut problems);
    check_editable_markers(manifest, &mut problems);

    tracing::debug!(
        "validated {} pins in {} groups: {} problem(s)",
        manifest.pin_count(),
        manifest.groups().len(),
        problems.len()
    );
    ProblemReport::into_result(problems)
}

/// Report repeats inside each group and return the first occurrence of every
/// name per group, in source order.
fn check_duplicates<'m>(
    manifest: &'m Manifest,
    problems: &mut Vec<Problem>,
) -> Vec<(&'m Group, &'m Pin)> {
    let mut firsts = Vec::new();
    for group in manifest.groups() {
        let mut seen: HashMap<&str, &Pin> = HashMap::new();
        for pin in group.pins() {
            match seen.entry(pin.name().key()) {
                MapEntry::Occupied(first) => problems.push(Problem::DuplicateInGroup {
                    group: group.name().to_string(),
                    package: first.get().name().to_string(),
                    first: first.get().version().to_string(),
                    second: pin.version().to_string(),
                }),
                MapEntry::Vacant(slot) => {
                    slot.insert(pin);
                    firsts.push((group, pin));
                }
            }
        }
    }
    firsts
}

fn check_cross_group(firsts: &[(&Group, &Pin)], problems: &mut Vec<Problem>) {
    let mut recorded: HashMap<&str, (&Group, &Pin)> = HashMap::new();
    for &(group, pin) in firsts {
        match recorded.entry(pin.name().key()) {
            MapEntry::Occupied(earlier) => {
                let (first_group, first_pin) = *earlier.get();
                if first_pin.version() != pin.version() {
                    problems.push(Problem::CrossGroupConflict {
                        package: first_pin.name().to_string(),
                        first_group: first_group.name().to_string(),
                        first_version: first_pin.version().to_string(),
                        second_group: group.name().to_string(),
                        second_version: pin.version().to_string(),
                    });
                }
            }
            MapEntry::Vacant(slot) => {
                slot.insert((group, pin));
            }
        }
    }
}

fn check_versions(manifest: &Manifest, policy: &VersionPolicy, problems: &mut Vec<Problem>) {
    for (group, pin) in manifest.pins() {
        if let Err(reason) = ExactVersion::parse(pin.version(), policy) {
            problems.push(Problem::MalformedVersion {
                group: group.name().to_string(),
                package: pin.name().to_string(),
                version: pin.version().to_string(),
                reason,
            });
        }
    }
}

fn check_editable_markers(manifest: &Manifest, problems: &mut Vec<Problem>) {
    let markers: Vec<_> = manifest.editable_markers().collect();
    if markers.len() > 1 {
        problems.push(Problem::MultipleEditableMarkers {
            count: markers.len(),
            groups: markers.iter().map(|(g, _)| g.name().to_string()).collect(),
            lines: markers.iter().map(|(_, m)| m.line()).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinset_core::parse;

    fn problems_of(text: &str) -> Vec<Problem> {
        match validate(&parse(text).unwrap()) {
            Ok(()) => Vec::new(),
            Err(report) => report.into_problems(),
        }
    }

    #[test]
    fn same_version_in_two_groups_is_fine() {
        assert!(problems_of("# A\nblack==24.10.0\n\n# B\nblack==24.10.0\n").is_empty());
    }

    #[test]
    fn duplicate_does_not_double_as_conflict() {
        let problems = problems_of("# A\npytest==8.3.4\npytest==8.3.5\n\n# B\npytest==8.3.4\n");
        assert_eq!(
            problems,
            vec![Problem::DuplicateInGroup {
                group: "A".to_string(),
                package: "pytest".to_string(),
                first: "8.3.4".to_string(),
                second: "8.3.5".to_string(),
            }]
        );
    }

    #[test]
    fn every_later_group_is_compared_to_the_first() {
        let problems = problems_of("# A\nruff==0.8.1\n\n# B\nruff==0.8.0\n\n# C\nruff==0.8.1\n\n# D\nruff==0.7.4\n");
        let seconds: Vec<_> = problems
            .iter()
            .map(|p| match p {
                Problem::CrossGroupConflict { second_group, .. } => second_group.as_str(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(seconds, vec!["B", "D"]);
    }

    #[test]
    fn names_match_after_normalization() {
        let problems = problems_of("# A\ntyping_extensions==4.12.2\n\n# B\nTyping-Extensions==4.12.1\n");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].package(), Some("typing_extensions"));
    }

    #[test]
    fn short_versions_follow_policy() {
        let manifest = parse("# A\nmypy==1.13\n").unwrap();
        assert!(validate(&manifest).is_err());
        let relaxed = ValidateOptions {
            versions: VersionPolicy { allow_short: true },
        };
        assert!(validate_with(&manifest, &relaxed).is_ok());
    }

    #[test]
    fn single_editable_marker_is_exempt_from_versions() {
        assert!(problems_of("# Optionals\n-e .[full]\n\n# Testing\npytest==8.3.4\n").is_empty());
    }
}
