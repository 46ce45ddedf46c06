use pinset_util::errors::PinsetError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = PinsetError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = PinsetError::Manifest {
        message: "not found".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: not found");
}

#[test]
fn test_resolution_error_display() {
    let err = PinsetError::Resolution {
        message: "unknown group 'lint'".to_string(),
    };
    assert_eq!(err.to_string(), "Resolution failed: unknown group 'lint'");
}

#[test]
fn test_lockfile_error_display() {
    let err = PinsetError::Lockfile {
        message: "stale".to_string(),
    };
    assert_eq!(err.to_string(), "Lockfile error: stale");
}

#[test]
fn test_config_error_display() {
    let err = PinsetError::Config {
        message: "bad key".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: bad key");
}

#[test]
fn test_generic_error_display() {
    let err = PinsetError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: PinsetError = io_err.into();
    assert!(matches!(err, PinsetError::Io(_)));
}
