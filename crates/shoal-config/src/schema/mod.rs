//! Configuration schema types for Shoal.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the shell ships with.

mod layout;
mod ptt;
mod system;
mod webview;
mod window;

pub use layout::*;
pub use ptt::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Shoal.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoalConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub webview: WebViewSettings,
    pub ptt: PttListenConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_chrome_dimensions() {
        let config = ShoalConfig::default();
        assert_eq!(config.layout.titlebar_height, 36);
        assert_eq!(config.layout.sidebar_width, 72);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: ShoalConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Shoal");
        assert!(config.webview.isolate_server_data);
        assert!(config.ptt.listen_globally);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ShoalConfig = toml::from_str(
            r#"
[layout]
sidebar_width = 90

[window]
startup_mode = "maximized"
"#,
        )
        .unwrap();
        assert_eq!(config.layout.sidebar_width, 90);
        assert_eq!(config.layout.titlebar_height, 36);
        assert_eq!(config.window.startup_mode, StartupMode::Maximized);
        assert_eq!(config.window.width, 1280);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<ShoalConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = ShoalConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[layout]"));
        assert!(text.contains("sidebar_width = 72"));
    }
}
