//! Rust -> shell view messages.

use serde_json::json;

use shoal_webview::appearance::appearance_payload;

use crate::app_state::core::ShoalApp;

impl ShoalApp {
    /// Send one message to the shell view. A missing shell is not an error:
    /// it simply asks for everything again once it is ready.
    pub(in crate::app_state) fn send_to_shell(&self, kind: &str, payload: &serde_json::Value) {
        let Some(ref shell) = self.shell else {
            tracing::trace!(kind, "no shell view, message dropped");
            return;
        };
        if let Err(e) = shell.send(kind, payload) {
            tracing::warn!(kind, error = %e, "Failed to send to shell view");
        }
    }

    pub(in crate::app_state) fn push_shell_state(&self) {
        match serde_json::to_value(self.state.snapshot()) {
            Ok(snapshot) => self.send_to_shell("shell_state", &snapshot),
            Err(e) => tracing::error!(error = %e, "Failed to serialize shell state"),
        }
    }

    pub(in crate::app_state) fn push_ptt_state(&self) {
        let payload = json!({
            "indicator": self.ptt.indicator(),
            "config": self.ptt.config(),
        });
        self.send_to_shell("ptt_state", &payload);
    }

    pub(in crate::app_state) fn push_appearance(&self) {
        self.send_to_shell("appearance", &appearance_payload(self.state.appearance()));
    }

    /// Everything the shell renders, sent when it (re)loads.
    pub(in crate::app_state) fn push_all(&self) {
        self.push_appearance();
        self.push_ptt_state();
        self.push_shell_state();
    }
}
