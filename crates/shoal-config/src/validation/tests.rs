//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&ShoalConfig::default()).is_ok());
}

#[test]
fn catches_sidebar_too_wide() {
    let mut config = ShoalConfig::default();
    config.layout.sidebar_width = 401;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.sidebar_width"));
}

#[test]
fn zero_chrome_is_allowed() {
    let mut config = ShoalConfig::default();
    config.layout.sidebar_width = 0;
    config.layout.titlebar_height = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_tiny_window() {
    let mut config = ShoalConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_blank_title() {
    let mut config = ShoalConfig::default();
    config.window.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.title"));
}

#[test]
fn catches_blank_user_agent() {
    let mut config = ShoalConfig::default();
    config.webview.user_agent = Some(String::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webview.user_agent"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ShoalConfig::default();
    config.layout.titlebar_height = 500;
    config.window.height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.titlebar_height"));
    assert!(err.contains("window.height"));
    assert!(err.contains("; "));
}
