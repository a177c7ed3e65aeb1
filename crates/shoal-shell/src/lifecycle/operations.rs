use shoal_common::{ActiveView, DevicePreferences, Server, ServerId};
use shoal_webview::SurfaceHost;
use tracing::{info, warn};

use super::LifecycleController;
use crate::state::ShellState;

impl<H: SurfaceHost> LifecycleController<H> {
    /// Add a server from user input and navigate to it.
    ///
    /// The first surface loads the full address including any invite; the
    /// stored server keeps only the base address.
    pub fn add_server(
        &mut self,
        state: &mut ShellState,
        name: &str,
        raw_address: &str,
        icon_url: Option<String>,
    ) -> ServerId {
        let id = state.add_server(name, raw_address, icon_url);
        info!(server_id = %id, "server added");
        self.select_view(state, ActiveView::Server(id.clone()));
        id
    }

    /// Destroy the surface, delete the server, and return to home.
    ///
    /// Unknown ids change nothing.
    pub fn remove_server(&mut self, state: &mut ShellState, id: &ServerId) -> Option<Server> {
        let removed = state.remove_server_entry(id)?;
        self.registry.destroy(id);
        state.set_active(ActiveView::Home);
        self.force_reconcile(state);
        info!(server_id = %id, "server removed");
        Some(removed)
    }

    /// Reload a server's surface in place. No effect if it was never
    /// visited.
    pub fn refresh(&mut self, id: &ServerId) {
        if let Err(e) = self.registry.reload(id) {
            warn!(server_id = %id, error = %e, "failed to reload server surface");
        }
    }

    /// Store new device preferences and recreate every live surface with
    /// them.
    ///
    /// Creation makes a surface visible for a moment, so everything is
    /// hidden immediately before and after the batch.
    pub fn set_device_preferences(&mut self, state: &mut ShellState, devices: DevicePreferences) {
        state.set_devices(devices);
        let devices = state.devices().clone();

        self.registry.hide_all();
        for id in self.registry.ids() {
            let Some(address) = state.server(&id).map(|s| s.url.clone()) else {
                self.registry.destroy(&id);
                continue;
            };
            self.create_logged(&id, &address, &devices);
        }
        self.registry.hide_all();

        info!(surfaces = self.registry.len(), "surfaces recreated with new device preferences");
        self.force_reconcile(state);
    }
}
