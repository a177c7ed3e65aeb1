use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in logical (DPI-independent) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Current window content size in physical pixels plus the scale factor
/// needed to convert it to logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub physical_width: u32,
    pub physical_height: u32,
    pub scale_factor: f64,
}

impl Viewport {
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self {
            physical_width,
            physical_height,
            scale_factor,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

/// Opaque, stable identity of a server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the content area currently shows.
///
/// Serialized as a plain string: `"home"`, `"settings"`, or a server id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveView {
    #[default]
    Home,
    Settings,
    Server(ServerId),
}

impl ActiveView {
    pub fn server_id(&self) -> Option<&ServerId> {
        match self {
            ActiveView::Server(id) => Some(id),
            _ => None,
        }
    }
}

impl From<String> for ActiveView {
    fn from(s: String) -> Self {
        match s.as_str() {
            "home" => ActiveView::Home,
            "settings" => ActiveView::Settings,
            _ => ActiveView::Server(ServerId(s)),
        }
    }
}

impl From<ActiveView> for String {
    fn from(v: ActiveView) -> Self {
        match v {
            ActiveView::Home => "home".into(),
            ActiveView::Settings => "settings".into(),
            ActiveView::Server(id) => id.0,
        }
    }
}
