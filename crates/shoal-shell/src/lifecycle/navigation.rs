use shoal_common::ActiveView;
use shoal_webview::SurfaceHost;
use tracing::debug;

use super::LifecycleController;
use crate::state::ShellState;

impl<H: SurfaceHost> LifecycleController<H> {
    /// Switch the content area to `view`.
    ///
    /// Leaving a server whose `keepLoaded` is false destroys its surface
    /// before anything else happens. Selecting a known server without a
    /// surface creates one (using a pending invite address, once). The
    /// visibility rule is then applied.
    pub fn select_view(&mut self, state: &mut ShellState, view: ActiveView) {
        if state.active() != &view {
            self.apply_leave_policy(state);
        }
        state.set_active(view);

        if let Some(server) = state.active_server() {
            let id = server.id.clone();
            if !self.registry.contains(&id) {
                let address = server.first_load_address().to_string();
                let devices = state.devices().clone();
                debug!(server_id = %id, "first visit: creating surface");
                if self.create_logged(&id, &address, &devices) {
                    state.clear_invite(&id);
                }
            }
        }

        self.force_reconcile(state);
    }

    fn apply_leave_policy(&mut self, state: &ShellState) {
        let Some(leaving) = state.active_server() else {
            return;
        };
        if leaving.keep_loaded() {
            return;
        }
        let id = leaving.id.clone();
        if self.registry.destroy(&id) {
            debug!(server_id = %id, "left server with keepLoaded=false: surface destroyed");
        }
    }
}
