//! Graceful shutdown: destroy server surfaces, stop the poller.

use super::core::ShoalApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ShoalApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Server surfaces go before the shell view, and both before the window
    /// they are children of.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut lifecycle) = self.lifecycle {
            lifecycle.shutdown();
        }
        self.lifecycle = None;

        self.ptt.shutdown();

        self.shell = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use shoal_config::{JsonStore, ShoalConfig};
    use shoal_platform::{ComboPoller, PttConfig};

    use crate::app_state::core::ShoalApp;

    fn fresh_app(dir: &tempfile::TempDir) -> ShoalApp {
        let store = JsonStore::empty(&dir.path().join("store.json"));
        ShoalApp::new(ShoalConfig::default(), store, None)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);

        app.shutdown();

        assert!(app.lifecycle.is_none());
        assert!(app.shell.is_none());
        assert!(app.window.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);

        app.shutdown();
        app.shutdown();

        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_stops_global_poller() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = fresh_app(&dir);
        app.ptt.configure(PttConfig::new(true, &["Control".to_string()]));
        assert!(app.ptt.poller().is_listening());

        app.shutdown();

        assert!(!app.ptt.poller().is_listening());
    }
}
