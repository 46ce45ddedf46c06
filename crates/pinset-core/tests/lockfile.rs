use pinset_core::lockfile::{LockedGroup, LockedPackage, Lockfile};
use tempfile::TempDir;

const TEXT: &str = "# Optionals\n-e .[full]\n\n# Testing\npytest==8.3.4\n";

fn sample() -> Lockfile {
    Lockfile::new(
        "requirements.txt",
        TEXT,
        Some(".[full]".to_string()),
        vec![
            LockedGroup {
                name: "Optionals".to_string(),
                packages: vec![],
            },
            LockedGroup {
                name: "Testing".to_string(),
                packages: vec![LockedPackage {
                    name: "pytest".to_string(),
                    version: "8.3.4".to_string(),
                }],
            },
        ],
    )
}

#[test]
fn round_trip_serialize_deserialize() {
    let lockfile = sample();
    let serialized = lockfile.to_string_pretty().unwrap();
    let deserialized: Lockfile = toml::from_str(&serialized).unwrap();
    assert_eq!(deserialized, lockfile);
    assert!(serialized.contains("[[group]]"));
    assert!(serialized.contains("[[group.package]]"));
}

#[test]
fn freshness_follows_manifest_text() {
    let lockfile = sample();
    assert!(lockfile.is_fresh(TEXT));
    assert!(!lockfile.is_fresh("# Testing\npytest==8.3.5\n"));
}

#[test]
fn write_then_read_from_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pinset.lock");
    let lockfile = sample();
    lockfile.write_to(&path).unwrap();
    assert_eq!(Lockfile::from_path(&path).unwrap(), lockfile);
}

#[test]
fn missing_lockfile_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = Lockfile::from_path(&tmp.path().join("pinset.lock")).unwrap_err();
    assert!(err.to_string().contains("Lockfile error"), "got: {err}");
}
