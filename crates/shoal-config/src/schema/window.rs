//! Main window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 400-7680).
    pub width: u32,
    /// Initial logical height (valid range: 300-4320).
    pub height: u32,
    /// Use the native title bar and borders.
    pub decorations: bool,
    pub startup_mode: StartupMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shoal".into(),
            width: 1280,
            height: 800,
            decorations: true,
            startup_mode: StartupMode::Windowed,
        }
    }
}
