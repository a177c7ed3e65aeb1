//! Navigation and server entity IPC handlers.
//!
//! Every change to the server list is written to the store and pushed back
//! to the shell view.

use serde::Deserialize;

use shoal_common::{ActiveView, ServerId};
use shoal_webview::IpcPayload;

use crate::app_state::core::ShoalApp;

use super::ipc_dispatch::text_payload;

// =============================================================================
// PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize)]
struct SelectViewRequest {
    view: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddServerRequest {
    name: String,
    url: String,
    #[serde(default)]
    icon_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RenameServerRequest {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetIconRequest {
    id: String,
    #[serde(default)]
    icon_url: Option<String>,
}

// =============================================================================
// HANDLERS
// =============================================================================

impl ShoalApp {
    /// Handle `select_view`: home, settings, or a known server id.
    pub(in crate::app_state) fn handle_select_view(&mut self, payload: &IpcPayload) {
        let req: SelectViewRequest = match payload.parse() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "select_view: bad payload");
                return;
            }
        };
        let view = ActiveView::from(req.view);
        if let Some(id) = view.server_id() {
            if self.state.server(id).is_none() {
                tracing::warn!(server_id = %id, "select_view: unknown server");
                return;
            }
        }

        let Some(lifecycle) = self.lifecycle.as_mut() else {
            tracing::warn!("select_view: surfaces not initialized");
            return;
        };
        lifecycle.select_view(&mut self.state, view);
        self.persist_servers();
        self.push_shell_state();
    }

    /// Handle `add_server`: create the entity and navigate to it.
    pub(in crate::app_state) fn handle_add_server(&mut self, payload: &IpcPayload) {
        let req: AddServerRequest = match payload.parse() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "add_server: bad payload");
                return;
            }
        };
        if req.name.trim().is_empty() || req.url.trim().is_empty() {
            tracing::warn!("add_server: name and url are required");
            return;
        }

        let Some(lifecycle) = self.lifecycle.as_mut() else {
            tracing::warn!("add_server: surfaces not initialized");
            return;
        };
        lifecycle.add_server(&mut self.state, &req.name, &req.url, req.icon_url);
        self.persist_servers();
        self.push_shell_state();
    }

    pub(in crate::app_state) fn handle_rename_server(&mut self, payload: &IpcPayload) {
        let req: RenameServerRequest = match payload.parse() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "rename_server: bad payload");
                return;
            }
        };
        let id = ServerId::new(req.id);
        if !self.state.rename_server(&id, &req.name) {
            tracing::warn!(server_id = %id, "rename_server: unknown server or blank name");
            return;
        }
        self.persist_servers();
        self.push_shell_state();
    }

    pub(in crate::app_state) fn handle_set_server_icon(&mut self, payload: &IpcPayload) {
        let req: SetIconRequest = match payload.parse() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "set_server_icon: bad payload");
                return;
            }
        };
        let id = ServerId::new(req.id);
        if !self.state.set_server_icon(&id, req.icon_url) {
            tracing::warn!(server_id = %id, "set_server_icon: rejected");
            return;
        }
        self.persist_servers();
        self.push_shell_state();
    }

    /// Handle `toggle_keep_loaded`. The surface, if any, stays until the
    /// user leaves the server.
    pub(in crate::app_state) fn handle_toggle_keep_loaded(&mut self, payload: &IpcPayload) {
        let Some(id) = text_payload(payload).map(ServerId::from) else {
            tracing::warn!("toggle_keep_loaded: missing server id");
            return;
        };
        match self.state.toggle_keep_loaded(&id) {
            Some(keep) => tracing::info!(server_id = %id, keep_loaded = keep, "keepLoaded toggled"),
            None => {
                tracing::warn!(server_id = %id, "toggle_keep_loaded: unknown server");
                return;
            }
        }
        self.persist_servers();
        self.push_shell_state();
    }

    pub(in crate::app_state) fn handle_refresh_server(&mut self, payload: &IpcPayload) {
        let Some(id) = text_payload(payload).map(ServerId::from) else {
            tracing::warn!("refresh_server: missing server id");
            return;
        };
        if let Some(ref mut lifecycle) = self.lifecycle {
            lifecycle.refresh(&id);
        }
    }

    /// Handle `remove_server`: destroy the surface, delete the entity, go
    /// home, and clear its web data in the background.
    pub(in crate::app_state) fn handle_remove_server(&mut self, payload: &IpcPayload) {
        let Some(id) = text_payload(payload).map(ServerId::from) else {
            tracing::warn!("remove_server: missing server id");
            return;
        };
        let Some(lifecycle) = self.lifecycle.as_mut() else {
            tracing::warn!("remove_server: surfaces not initialized");
            return;
        };
        if lifecycle.remove_server(&mut self.state, &id).is_none() {
            tracing::warn!(server_id = %id, "remove_server: unknown server");
            return;
        }
        self.persist_servers();
        self.push_shell_state();
        self.remove_server_data(&id);
    }

    fn remove_server_data(&self, id: &ServerId) {
        if !self.config.webview.isolate_server_data {
            return;
        }
        let Some(ref root) = self.data_root else {
            return;
        };
        if let Err(e) = shoal_platform::paths::spawn_remove_server_data(root, id) {
            tracing::error!(server_id = %id, error = %e, "Failed to start data cleanup");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
