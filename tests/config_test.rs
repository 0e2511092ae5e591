//! Tests for worker configuration loading.

use hangman_worker::HangmanConfig;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_load_valid_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "hangman.toml",
        r#"transport_name = "ussd_transport"
ussd_code = "*120*1#"
random_word_url = "http://randomword.example.com/get"
"#,
    );

    let config = HangmanConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.transport_name(), "ussd_transport");
    assert_eq!(config.ussd_code(), "*120*1#");
    assert_eq!(config.random_word_url(), "http://randomword.example.com/get");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = HangmanConfig::from_file(dir.path().join("absent.toml")).expect_err("Should fail");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "bad.toml", "this is not valid toml !!!@@@");
    let err = HangmanConfig::from_file(&path).expect_err("Should fail");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_field_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "partial.toml", r#"transport_name = "ussd_transport""#);
    assert!(HangmanConfig::from_file(&path).is_err());
}
