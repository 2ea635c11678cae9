//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LoadMode, PortholeConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_porthole_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, porthole_common::ConfigError::ParseError(_)));
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[window]
title = "Shell"
width = 1024

[load]
mode = "development"
dev_url = "http://127.0.0.1:5173"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Shell");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.load.mode, LoadMode::Development);
    assert_eq!(config.load.dev_url, "http://127.0.0.1:5173");
    // Defaults preserved
    assert_eq!(config.window.height, 700);
    assert_eq!(config.app.name, "Porthole");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, porthole_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\nbackground = \"teal\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.background, "teal");
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("porthole").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.app.name, "Porthole");
    assert_eq!(config.load.mode, LoadMode::Auto);
}

#[test]
fn default_config_toml_is_valid() {
    let config: PortholeConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("porthole"));
        assert!(path_str.ends_with("config.toml"));
    }
}
