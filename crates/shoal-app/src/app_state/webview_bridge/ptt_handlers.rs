//! Push-to-talk IPC handlers.

use serde::Deserialize;

use shoal_platform::PttConfig;
use shoal_webview::IpcPayload;

use crate::app_state::core::ShoalApp;

use super::ipc_dispatch::text_payload;

#[derive(Debug, Deserialize)]
struct SetPttRequest {
    enabled: bool,
    #[serde(default)]
    keys: Vec<String>,
}

impl ShoalApp {
    /// Handle `set_ptt`: reconfigure the reducer and poller together, then
    /// persist.
    pub(in crate::app_state) fn handle_set_ptt(&mut self, payload: &IpcPayload) {
        let req: SetPttRequest = match payload.parse() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "set_ptt: bad payload");
                return;
            }
        };

        self.ptt.configure(PttConfig::new(req.enabled, &req.keys));
        self.persist_ptt();
        self.push_ptt_state();
    }

    /// Handle `ptt_key_down` / `ptt_key_up` from the shell's key listener.
    pub(in crate::app_state) fn handle_ptt_key(&mut self, down: bool, payload: &IpcPayload) {
        let Some(identifier) = text_payload(payload) else {
            tracing::warn!(down, "ptt key message without an identifier");
            return;
        };

        let before = self.ptt.indicator();
        let after = if down {
            self.ptt.key_down(identifier)
        } else {
            self.ptt.key_up(identifier)
        };
        if after != before {
            self.push_ptt_state();
        }
    }
}
