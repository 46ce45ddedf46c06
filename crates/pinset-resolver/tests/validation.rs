use pinset_core::parse;
use pinset_resolver::{validate, Problem};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

fn problems(name: &str) -> Vec<Problem> {
    let manifest = parse(&fixture(name)).unwrap();
    validate(&manifest).unwrap_err().into_problems()
}

#[test]
fn test_well_formed_fixture_is_ok() {
    let manifest = parse(&fixture("requirements.txt")).unwrap();
    assert!(validate(&manifest).is_ok());
}

#[test]
fn test_pytest_conflict_across_groups() {
    assert_eq!(
        problems("conflict.txt"),
        vec![Problem::CrossGroupConflict {
            package: "pytest".to_string(),
            first_group: "Testing".to_string(),
            first_version: "8.3.4".to_string(),
            second_group: "Documentation".to_string(),
            second_version: "8.3.2".to_string(),
        }]
    );
}

#[test]
fn test_two_editable_markers_only() {
    let found = problems("two-editable.txt");
    assert_eq!(found.len(), 1, "got {found:?}");
    assert_eq!(
        found[0],
        Problem::MultipleEditableMarkers {
            count: 2,
            groups: vec!["Optionals".to_string(), "Testing".to_string()],
            lines: vec![2, 5],
        }
    );
}

#[test]
fn test_every_problem_reported_in_check_order() {
    let found = problems("many-problems.txt");
    assert_eq!(found.len(), 4, "got {found:?}");
    assert!(matches!(
        &found[0],
        Problem::DuplicateInGroup { group, first, second, .. }
            if group == "Testing" && first == "8.3.4" && second == "8.3.5"
    ));
    assert!(matches!(
        &found[1],
        Problem::CrossGroupConflict { first_version, second_version, .. }
            if first_version == "8.3.4" && second_version == "8.3.2"
    ));
    assert!(matches!(
        &found[2],
        Problem::MalformedVersion { package, version, .. }
            if package == "mypy" && version == "1.13"
    ));
    assert!(matches!(&found[3], Problem::MultipleEditableMarkers { count: 2, .. }));
}

#[test]
fn test_same_group_different_versions_names_both() {
    let manifest = parse("# Testing\ntrio==0.27.0\ntrio==0.26.2\n").unwrap();
    let found = validate(&manifest).unwrap_err().into_problems();
    assert_eq!(found.len(), 1);
    let message = found[0].to_string();
    assert!(message.contains("0.27.0") && message.contains("0.26.2"), "got: {message}");
}

#[test]
fn test_malformed_versions_each_reported() {
    let manifest = parse("# Testing\na==1.0\nb==1.0.0rc1\nc==01.2.3\nd==1.2.3\n").unwrap();
    let bad: Vec<_> = validate(&manifest)
        .unwrap_err()
        .problems()
        .iter()
        .filter_map(|p| p.package().map(str::to_string))
        .collect();
    assert_eq!(bad, vec!["a", "b", "c"]);
}
