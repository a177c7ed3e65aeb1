//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LogLevel, ShoalConfig};
use shoal_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_shoal_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Workspace"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Workspace");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.layout.sidebar_width, 72);
    assert!(config.ptt.listen_globally);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_load_without_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\ntitlebar_height = 900\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.titlebar_height, 900);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoal").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.titlebar_height, 36);
    assert_eq!(config.window.title, "Shoal");
}

#[test]
fn template_parses_to_defaults() {
    let config: ShoalConfig = toml::from_str(default_config_toml()).unwrap();
    let defaults = ShoalConfig::default();
    assert_eq!(config.layout, defaults.layout);
    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.logging.level, defaults.logging.level);
}

#[test]
fn default_config_path_ends_with_shoal_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("shoal/config.toml"));
    }
}
