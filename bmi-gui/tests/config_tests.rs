//! Tests for loading `AppConfig` from JSON files.

use std::fs;

use bmi_gui::{AppConfig, ConfigError};
use tempfile::TempDir;

#[test]
fn defaults_match_the_calculator_window() {
    let config = AppConfig::default();
    assert_eq!(config.window_title, "BMI Calculator");
    assert_eq!(config.window_width, 480.0);
    assert_eq!(config.window_height, 420.0);
    assert_eq!((config.window_x, config.window_y), (100.0, 100.0));
    assert_eq!(config.fallback_name, "User");
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bmi.json");
    fs::write(&path, r#"{ "fallback_name": "Guest", "window_width": 640 }"#).unwrap();

    let config = AppConfig::from_file(&path).unwrap();

    assert_eq!(config.fallback_name, "Guest");
    assert_eq!(config.window_width, 640.0);
    assert_eq!(config.window_height, 420.0);
    assert_eq!(config.window_title, "BMI Calculator");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = AppConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "window_width": "wide" }"#).unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
