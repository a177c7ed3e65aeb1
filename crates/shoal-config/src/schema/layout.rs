//! Shell chrome layout configuration.

use serde::{Deserialize, Serialize};

/// Fixed chrome around the server content region, in logical pixels.
///
/// Server surfaces are placed below the title bar and to the right of the
/// sidebar; these two numbers define that region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the title bar strip (valid range: 0-200).
    pub titlebar_height: u32,
    /// Width of the server sidebar (valid range: 0-400).
    pub sidebar_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            titlebar_height: 36,
            sidebar_width: 72,
        }
    }
}
