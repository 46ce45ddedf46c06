use pinset_core::{parse, Entry, ParseError};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

#[test]
fn test_parse_requirements_fixture() {
    let manifest = parse(&read_fixture("requirements.txt")).unwrap();
    let names: Vec<&str> = manifest.groups().iter().map(|g| g.name()).collect();
    assert_eq!(names, vec!["Optionals", "Testing", "Documentation", "Packaging"]);
    assert_eq!(manifest.pin_count(), 16);
    assert_eq!(manifest.editable_markers().count(), 1);

    let testing = manifest.group("testing").unwrap();
    assert_eq!(testing.ordinal(), 1);
    assert_eq!(testing.pins().count(), 10);
    let first = testing.pins().next().unwrap();
    assert_eq!(first.name().as_str(), "coverage");
    assert_eq!(first.version(), "7.6.1");
    assert_eq!(first.line(), 5);

    let packaging = manifest.group("Packaging").unwrap();
    let build = packaging.pins().next().unwrap();
    assert_eq!(build.version(), "1.2.2.post1");
}

#[test]
fn test_parse_editable_marker_fixture() {
    let manifest = parse(&read_fixture("requirements.txt")).unwrap();
    let optionals = &manifest.groups()[0];
    match &optionals.entries()[0] {
        Entry::Editable(marker) => {
            assert_eq!(marker.path(), ".");
            assert_eq!(marker.extras(), &["full".to_string()]);
            assert_eq!(marker.line(), 2);
        }
        other => panic!("expected editable marker, got {other:?}"),
    }
}

#[test]
fn test_parse_conflict_fixture_is_syntactically_fine() {
    let manifest = parse(&read_fixture("conflict.txt")).unwrap();
    assert_eq!(manifest.groups().len(), 2);
    assert_eq!(manifest.pin_count(), 4);
}

#[test]
fn test_parse_override_fixture() {
    let manifest = parse(&read_fixture("local-overrides.txt")).unwrap();
    let pins: Vec<_> = manifest.pins().map(|(_, p)| p).collect();
    assert!(pins[0].is_override());
    assert!(!pins[1].is_override());
}

#[test]
fn test_parse_invalid_missing_header_fixture() {
    let err = parse(&read_fixture("invalid-missing-header.txt")).unwrap_err();
    assert!(matches!(err, ParseError::MissingHeader { line: 4, .. }), "got {err:?}");
}

#[test]
fn test_fixture_round_trips_through_render() {
    let first = parse(&read_fixture("requirements.txt")).unwrap();
    let second = parse(&first.render()).unwrap();
    assert_eq!(first, second);
}
