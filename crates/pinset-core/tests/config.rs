use pinset_core::config::{dirs_path, GlobalConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_global_config_defaults() {
    let config = GlobalConfig::default();
    assert_eq!(config.manifest, "requirements.txt");
    assert_eq!(config.lock.file, "pinset.lock");
    assert!(!config.validate.allow_short_versions);
}

#[test]
fn test_global_config_empty_toml_uses_defaults() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert_eq!(config.manifest, "requirements.txt");
    assert_eq!(config.lock.file, "pinset.lock");
}

#[test]
fn test_dirs_path_contains_pinset() {
    assert!(dirs_path().ends_with(".pinset"));
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
manifest = "requirements-dev.txt"

[validate]
allow-short-versions = true

[lock]
file = "requirements.lock"
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.manifest, "requirements-dev.txt");
    assert!(config.validate.allow_short_versions);
    assert!(config.validate.version_policy().allow_short);
    assert_eq!(config.lock.file, "requirements.lock");
}

#[test]
fn test_load_from_missing_file_is_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert_eq!(config.manifest, "requirements.txt");
}

#[test]
fn test_load_from_invalid_file_fails() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"[validate\n").unwrap();
    tmp.flush().unwrap();
    let err = GlobalConfig::load_from(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}
