//! Surface lifecycle policy on top of the [`SurfaceRegistry`].
//!
//! The controller is the only owner of the registry. It decides when
//! surfaces are created, recreated and destroyed, and re-applies the
//! visibility rule whenever [`ShellState`] changes. Every registry failure is
//! logged and swallowed here so navigation always stays responsive.

mod navigation;
mod operations;


use shoal_common::{DevicePreferences, ServerId};
use shoal_webview::{SurfaceHost, SurfaceRegistry};
use tracing::{debug, warn};

use crate::state::ShellState;
use crate::visibility::{apply_visibility, desired_visibility};

pub struct LifecycleController<H: SurfaceHost> {
    registry: SurfaceRegistry<H>,
    /// State generation the current visibility was derived from.
    applied: Option<u64>,
}

impl<H: SurfaceHost> LifecycleController<H> {
    pub fn new(registry: SurfaceRegistry<H>) -> Self {
        Self {
            registry,
            applied: None,
        }
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &SurfaceRegistry<H> {
        &self.registry
    }

    /// Re-apply the visibility rule if `state` changed since the last call.
    pub fn reconcile(&mut self, state: &ShellState) {
        if self.applied == Some(state.generation()) {
            return;
        }
        self.force_reconcile(state);
    }

    /// Re-apply the visibility rule unconditionally.
    pub fn force_reconcile(&mut self, state: &ShellState) {
        let target = desired_visibility(state);
        debug!(?target, generation = state.generation(), "applying visibility");
        apply_visibility(&mut self.registry, &target);
        self.applied = Some(state.generation());
    }

    /// Window resized or moved to a display with another scale factor.
    pub fn resize(&mut self) {
        self.registry.resize_all();
    }

    /// Destroy every surface.
    pub fn shutdown(&mut self) {
        self.registry.destroy_all();
        self.applied = None;
    }

    /// Create a surface for `id`, logging failure. Returns whether the
    /// surface is now registered.
    fn create_logged(&mut self, id: &ServerId, address: &str, devices: &DevicePreferences) -> bool {
        match self.registry.create(id, address, devices) {
            Ok(()) => true,
            Err(e) => {
                warn!(server_id = %id, error = %e, "failed to create server surface");
                false
            }
        }
    }
}
