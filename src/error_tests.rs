use std::path::PathBuf;

use super::*;

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "not found")
}

#[test]
fn error_display_config() {
    let err = HeaderGuardError::Config("--jobs must be at least 1".to_string());
    assert_eq!(err.to_string(), "Configuration error: --jobs must be at least 1");
}

#[test]
fn error_display_template_directory_missing() {
    let err = HeaderGuardError::TemplateDirectoryMissing {
        path: PathBuf::from("tools/headers"),
        source: not_found(),
    };
    assert!(err.to_string().contains("tools/headers"));
}

#[test]
fn error_template_read_keeps_source() {
    let err = HeaderGuardError::TemplateRead {
        path: PathBuf::from("headers/copyright.js"),
        source: not_found(),
    };
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "not found");
}

#[test]
fn error_display_invalid_pattern() {
    let source = globset::Glob::new("src/[").unwrap_err();
    let err = HeaderGuardError::InvalidPattern {
        pattern: "src/[".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid glob pattern: src/[");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        HeaderGuardError::Config("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        HeaderGuardError::TemplateDirectoryMissing {
            path: PathBuf::from("h"),
            source: not_found(),
        }
        .error_type(),
        "TemplateDirectoryMissing"
    );
    assert_eq!(HeaderGuardError::Io(not_found()).error_type(), "IO");
}

#[test]
fn suggestion_only_for_actionable_errors() {
    let missing = HeaderGuardError::TemplateDirectoryMissing {
        path: PathBuf::from("h"),
        source: not_found(),
    };
    assert!(missing.suggestion().unwrap().contains("--headers"));
    assert!(HeaderGuardError::Io(not_found()).suggestion().is_none());
}

#[test]
fn target_error_display() {
    assert_eq!(TargetError::NoExtension.to_string(), "file has no extension");
    assert_eq!(
        TargetError::UnsupportedExtension(".zzz".to_string()).to_string(),
        "no header template for extension .zzz"
    );
    assert!(TargetError::Read(not_found()).to_string().contains("not found"));
}

#[test]
fn target_error_kind() {
    assert_eq!(TargetError::NoExtension.kind(), "no_extension");
    assert_eq!(
        TargetError::UnsupportedExtension(".zzz".to_string()).kind(),
        "unsupported_extension"
    );
    assert_eq!(TargetError::Write(not_found()).kind(), "write");
}
