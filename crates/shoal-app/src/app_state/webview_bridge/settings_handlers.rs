//! Settings IPC handlers: media devices and appearance.
//!
//! Each update is applied, written to the store and pushed back. No save
//! button.

use shoal_common::{Appearance, DevicePreferences};
use shoal_webview::appearance::validate_css_color;
use shoal_webview::IpcPayload;

use crate::app_state::core::ShoalApp;

// =============================================================================
// HANDLERS
// =============================================================================

impl ShoalApp {
    /// Handle `set_devices`: every live surface is recreated so the new
    /// restriction script takes effect.
    pub(in crate::app_state) fn handle_set_devices(&mut self, payload: &IpcPayload) {
        let devices: DevicePreferences = match payload.parse() {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "set_devices: bad payload");
                return;
            }
        };
        if &devices == self.state.devices() {
            tracing::debug!("set_devices: unchanged");
            return;
        }

        let Some(lifecycle) = self.lifecycle.as_mut() else {
            tracing::warn!("set_devices: surfaces not initialized");
            return;
        };
        lifecycle.set_device_preferences(&mut self.state, devices);
        self.persist_devices();
        self.push_shell_state();
    }

    /// Handle `set_appearance`: every colour must be a hex value.
    pub(in crate::app_state) fn handle_set_appearance(&mut self, payload: &IpcPayload) {
        let appearance: Appearance = match payload.parse() {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(error = %e, "set_appearance: bad payload");
                return;
            }
        };
        if let Err(e) = validate_appearance(&appearance) {
            tracing::warn!(error = %e, "set_appearance: rejected");
            return;
        }

        self.state.set_appearance(appearance);
        self.persist_appearance();
        self.push_appearance();
    }
}

fn validate_appearance(appearance: &Appearance) -> Result<(), String> {
    [
        &appearance.accent_color,
        &appearance.sidebar_bg,
        &appearance.server_circle,
        &appearance.window_bg,
    ]
    .into_iter()
    .try_for_each(|color| validate_css_color(color))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shoal_config::{JsonStore, ShoalConfig, StoreKey};

    fn app(dir: &tempfile::TempDir) -> ShoalApp {
        let store = JsonStore::empty(&dir.path().join("store.json"));
        ShoalApp::new(ShoalConfig::default(), store, None)
    }

    #[test]
    fn default_appearance_is_valid() {
        assert!(validate_appearance(&Appearance::default()).is_ok());
    }

    #[test]
    fn appearance_with_css_injection_is_rejected() {
        let appearance = Appearance {
            sidebar_bg: "red; background: url(evil)".into(),
            ..Default::default()
        };
        assert!(validate_appearance(&appearance).is_err());
    }

    #[test]
    fn set_appearance_applies_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        app.handle_ipc_message(
            r##"{"kind":"set_appearance","payload":{"accentColor":"#ff0000","sidebarBg":"#000000","serverCircle":"#111111","windowBg":"#222222"}}"##,
        );

        assert_eq!(app.state.appearance().accent_color, "#ff0000");
        let stored: Appearance = JsonStore::open(&dir.path().join("store.json"))
            .unwrap()
            .get(StoreKey::Appearance)
            .unwrap()
            .unwrap();
        assert_eq!(stored.window_bg, "#222222");
    }

    #[test]
    fn invalid_appearance_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);

        app.handle_ipc_message(
            r#"{"kind":"set_appearance","payload":{"accentColor":"javascript:alert(1)"}}"#,
        );

        assert_eq!(app.state.appearance(), &Appearance::default());
    }

    #[test]
    fn unchanged_devices_are_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let before = app.state.generation();

        app.handle_ipc_message(
            r#"{"kind":"set_devices","payload":{"micId":null,"camId":null,"speakerId":null}}"#,
        );

        assert_eq!(app.state.generation(), before);
    }
}
