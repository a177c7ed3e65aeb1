//! Embedded webview settings.

use serde::{Deserialize, Serialize};

/// Settings applied to every server surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the web inspector on server surfaces and the shell view.
    pub devtools: bool,
    /// Override the user agent string. `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Give each server its own storage directory.
    pub isolate_server_data: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            isolate_server_data: true,
        }
    }
}
