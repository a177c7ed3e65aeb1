use serde::{Deserialize, Serialize};

use super::color::Color;

/// Persisted shell colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    pub accent_color: String,
    pub sidebar_bg: String,
    pub server_circle: String,
    pub window_bg: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            accent_color: "#4e0073".into(),
            sidebar_bg: "#1e1e1e".into(),
            server_circle: "#2e2e2e".into(),
            window_bg: "#262626".into(),
        }
    }
}

impl Appearance {
    /// CSS custom properties for the shell view, including derived shades.
    ///
    /// Unparseable colours fall back to the default for that slot.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let defaults = Appearance::default();
        let pick = |value: &str, fallback: &str| {
            Color::from_hex(value)
                .or_else(|| Color::from_hex(fallback))
                .unwrap_or(Color::from_rgb(0, 0, 0))
        };

        let accent = pick(&self.accent_color, &defaults.accent_color);
        let sidebar = pick(&self.sidebar_bg, &defaults.sidebar_bg);
        let circle = pick(&self.server_circle, &defaults.server_circle);
        let window = pick(&self.window_bg, &defaults.window_bg);

        vec![
            ("--accent", accent.to_hex()),
            ("--accent-hover", accent.darken(20).to_hex()),
            ("--toggle-on", accent.to_hex()),
            ("--sidebar-bg", sidebar.to_hex()),
            ("--server-circle", circle.to_hex()),
            ("--window-bg", window.to_hex()),
            ("--window-bg-secondary", window.darken(14).to_hex()),
        ]
    }
}
