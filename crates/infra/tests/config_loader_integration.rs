//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use btpanel_domain::PanelError;
use btpanel_infra::config;
use tempfile::NamedTempFile;

fn write_with_extension(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_with_extension(
        r#"{
            "host": "https://192.168.1.10:8888",
            "key": "json-key",
            "session_dir": "/var/lib/btpanel",
            "timeout_secs": 120
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("json config");

    assert_eq!(config.host, "https://192.168.1.10:8888");
    assert_eq!(config.key, "json-key");
    assert_eq!(config.session_dir, std::path::PathBuf::from("/var/lib/btpanel"));
    assert_eq!(config.timeout_secs, 120);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file_uses_defaults() {
    let path = write_with_extension(
        r#"
host = "https://panel.example.com:8888"
key = "toml-key"
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("toml config");

    assert_eq!(config.key, "toml-key");
    assert_eq!(config.timeout_secs, 60);
    assert!(config.session_dir.ends_with("btpanel-sessions"));
    assert!(config.validate().is_ok());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_toml_is_config_error() {
    let path = write_with_extension("host = [unterminated", "toml");

    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(matches!(err, PanelError::Config(ref msg) if msg.contains("TOML")));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_host_is_rejected_at_load() {
    let path = write_with_extension(r#"{"host":"panel without scheme","key":"k"}"#, "json");

    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(err.is_configuration());

    std::fs::remove_file(path).ok();
}
