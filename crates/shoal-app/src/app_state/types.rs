//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for webview and push-to-talk events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);
