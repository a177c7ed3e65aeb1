//! IPC message validation and dispatch from the shell view to Rust handlers.

use shoal_webview::{IpcMessage, IpcPayload};

use crate::app_state::core::ShoalApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "shell_ready",
    "select_view",
    "add_server",
    "rename_server",
    "set_server_icon",
    "toggle_keep_loaded",
    "refresh_server",
    "remove_server",
    "overlay_opened",
    "overlay_closed",
    "set_devices",
    "set_ptt",
    "ptt_key_down",
    "ptt_key_up",
    "set_appearance",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// A non-blank string payload, trimmed.
pub(super) fn text_payload(payload: &IpcPayload) -> Option<&str> {
    match payload {
        IpcPayload::Text(s) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ShoalApp {
    /// Handle a single IPC message from the shell view.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "ping" => {
                // Respond with pong, used for IPC round-trip testing
                self.send_to_shell("pong", &serde_json::json!("pong"));
            }
            "shell_ready" => self.push_all(),
            "select_view" => self.handle_select_view(&msg.payload),
            "add_server" => self.handle_add_server(&msg.payload),
            "rename_server" => self.handle_rename_server(&msg.payload),
            "set_server_icon" => self.handle_set_server_icon(&msg.payload),
            "toggle_keep_loaded" => self.handle_toggle_keep_loaded(&msg.payload),
            "refresh_server" => self.handle_refresh_server(&msg.payload),
            "remove_server" => self.handle_remove_server(&msg.payload),
            "overlay_opened" | "overlay_closed" => {
                self.handle_overlay(msg.kind == "overlay_opened", &msg.payload)
            }
            "set_devices" => self.handle_set_devices(&msg.payload),
            "set_appearance" => self.handle_set_appearance(&msg.payload),
            "set_ptt" => self.handle_set_ptt(&msg.payload),
            "ptt_key_down" | "ptt_key_up" => {
                self.handle_ptt_key(msg.kind == "ptt_key_down", &msg.payload)
            }
            _ => {
                // Shouldn't happen, allowlist checked above
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
            }
        }

        // Visibility follows state without waiting for the next poll tick.
        if let Some(ref mut lifecycle) = self.lifecycle {
            lifecycle.reconcile(&self.state);
        }
    }

    /// `overlay_opened` / `overlay_closed`: any open overlay hides every
    /// server surface.
    fn handle_overlay(&mut self, opened: bool, payload: &IpcPayload) {
        let Some(name) = text_payload(payload) else {
            tracing::warn!(opened, "overlay message without a name");
            return;
        };
        let changed = if opened {
            self.state.open_overlay(name)
        } else {
            self.state.close_overlay(name)
        };
        tracing::debug!(overlay = name, opened, changed, "overlay state");
    }
}

// =============================================================================
// TESTS
// =============================================================================
