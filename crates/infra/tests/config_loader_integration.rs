//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! the environment.

use std::io::Write;
use std::path::PathBuf;

use querytap_domain::{KnownIssue, QueryTapError};
use querytap_infra::config;
use tempfile::NamedTempFile;

fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("querytap")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[event_log]
capacity = 2048

[dashboard]
window = 30

[logging]
filter = "querytap_core=debug"
json = true

[[known_issues]]
pattern = "permission denied for table"
suggestion = "Check the row level security policy for this table."
autofix = true
"#;
    let file = config_file(".toml", toml_content);

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.event_log.capacity, 2048);
    assert_eq!(config.dashboard.window, 30);
    assert_eq!(config.logging.filter, "querytap_core=debug");
    assert!(config.logging.json);

    // An explicit list replaces the built-in signatures
    assert_eq!(config.known_issues.len(), 1);
    assert!(config.known_issues[0].autofix);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_with_minimal_fields() {
    let file = config_file(".json", "{}");

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config with minimal fields");

    assert_eq!(config.event_log.capacity, 10_000);
    assert_eq!(config.dashboard.window, 100);
    assert_eq!(config.logging.filter, "info");
    assert_eq!(config.known_issues, KnownIssue::builtin());
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/path/querytap.json")));

    match result {
        Err(QueryTapError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let file = config_file(".json", r#"{ "this is": "not valid" "#);

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(QueryTapError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_uses_explicit_path_and_env_overrides() {
    let file = config_file(".toml", "[event_log]\ncapacity = 64\n\n[dashboard]\nwindow = 10\n");

    std::env::set_var("QUERYTAP_CONFIG", file.path());
    std::env::set_var("QUERYTAP_DASHBOARD_WINDOW", "25");
    let loaded = config::load();
    std::env::set_var("QUERYTAP_LOG_CAPACITY", "0");
    let rejected = config::load();
    std::env::remove_var("QUERYTAP_CONFIG");
    std::env::remove_var("QUERYTAP_DASHBOARD_WINDOW");
    std::env::remove_var("QUERYTAP_LOG_CAPACITY");

    let config = loaded.expect("Failed to load config");
    assert_eq!(config.event_log.capacity, 64);
    assert_eq!(config.dashboard.window, 25);

    // Overrides are validated like file values
    assert!(matches!(rejected, Err(QueryTapError::Config(_))));
}
