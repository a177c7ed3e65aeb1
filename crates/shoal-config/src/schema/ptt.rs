//! Push-to-talk listener configuration.
//!
//! The key combination itself lives in the app store (`ptt` key) because
//! the settings UI edits it. Only the listener behavior lives here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PttListenConfig {
    /// Observe the combination while the window is unfocused.
    pub listen_globally: bool,
}

impl Default for PttListenConfig {
    fn default() -> Self {
        Self {
            listen_globally: true,
        }
    }
}
