use serde::{Deserialize, Serialize};

use crate::input::{identifier_to_token, order_keys};

/// Persisted push-to-talk settings.
///
/// The combination is stored twice: `keys` as browser identifiers for the
/// shell's key listener, `tokens` for the global poller. Build it through
/// [`PttConfig::new`] so both lists always describe the same combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PttConfig {
    pub enabled: bool,
    pub keys: Vec<String>,
    pub tokens: Vec<String>,
}

impl PttConfig {
    pub fn new(enabled: bool, keys: &[String]) -> Self {
        let keys = order_keys(keys);
        let tokens = keys.iter().map(|k| identifier_to_token(k)).collect();
        Self {
            enabled,
            keys,
            tokens,
        }
    }

    /// Rebuild the token list from the identifiers, repairing a record
    /// whose two lists drifted apart on disk.
    pub fn resynced(self) -> Self {
        Self::new(self.enabled, &self.keys)
    }

    /// Enabled with a non-empty combination.
    pub fn is_armed(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }
}
