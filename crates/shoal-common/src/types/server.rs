use serde::{Deserialize, Serialize};

use super::core::ServerId;

/// Sidebar colours assigned to new servers, indexed by server count.
pub const SERVER_COLORS: [&str; 8] = [
    "#5865f2", "#3ba55c", "#ed4245", "#faa61a", "#eb459e", "#00b0f4", "#57f287", "#ff73fa",
];

/// A remote web application the user has added to the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    /// Base address, always carrying a scheme and never an invite parameter.
    pub url: String,
    pub icon_letter: String,
    pub icon_color: String,
    /// Custom icon as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Absent means keep loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_loaded: Option<bool>,
    /// Address used for the very first load only. Never persisted.
    #[serde(skip)]
    pub invite_url: Option<String>,
}

impl Server {
    pub fn keep_loaded(&self) -> bool {
        self.keep_loaded.unwrap_or(true)
    }

    /// Address for the next surface creation: the invite address if one is
    /// still pending, otherwise the base address.
    pub fn first_load_address(&self) -> &str {
        self.invite_url.as_deref().unwrap_or(&self.url)
    }
}

/// First character of the trimmed name, upper-cased, or `?` for blank names.
pub fn display_letter(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Palette colour for the server at position `index`.
pub fn palette_color(index: usize) -> &'static str {
    SERVER_COLORS[index % SERVER_COLORS.len()]
}
