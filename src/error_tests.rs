use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = LineGuardError::Config("unknown check 'tabs'".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown check 'tabs'");
}

#[test]
fn error_display_file_read() {
    let err = LineGuardError::FileRead {
        path: PathBuf::from("main.go"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert_eq!(err.to_string(), "Failed to read file: main.go");
}

#[test]
fn file_read_keeps_io_source() {
    use std::error::Error as _;

    let err = LineGuardError::FileRead {
        path: PathBuf::from("main.go"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let source = err.source().unwrap();
    assert!(source.to_string().contains("denied"));
}

#[test]
fn io_error_converts() {
    let err: LineGuardError = std::io::Error::other("boom").into();
    assert!(matches!(err, LineGuardError::Io(_)));
    assert!(!err.is_file_read());
}

#[test]
fn toml_error_converts() {
    let parse_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
    let err: LineGuardError = parse_err.into();
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn is_file_read_only_for_file_read() {
    let err = LineGuardError::FileRead {
        path: PathBuf::from("x"),
        source: std::io::Error::other("x"),
    };
    assert!(err.is_file_read());
    assert!(!LineGuardError::Config("x".to_string()).is_file_read());
}
