//! Ownership table of live server surfaces.
//!
//! The registry is the only holder of surface handles. Every operation acts
//! on the current map contents, so a later `show` or `hide_all` always
//! supersedes an earlier one.

use std::collections::HashMap;

use shoal_common::{DevicePreferences, Rect, ServerId, SurfaceError};
use tracing::{debug, warn};

use crate::bounds::{content_bounds, ChromeLayout};
use crate::host::{SurfaceHost, SurfaceParams};

#[cfg(test)]
mod tests;

struct Entry<S> {
    surface: S,
    shown: bool,
}

/// Map from server id to its single live surface.
pub struct SurfaceRegistry<H: SurfaceHost> {
    host: H,
    layout: ChromeLayout,
    surfaces: HashMap<ServerId, Entry<H::Surface>>,
}

impl<H: SurfaceHost> SurfaceRegistry<H> {
    pub fn new(host: H, layout: ChromeLayout) -> Self {
        Self {
            host,
            layout,
            surfaces: HashMap::new(),
        }
    }

    /// Materialize a surface for `id` loading `address`.
    ///
    /// Any existing surface for `id` is destroyed first. The new surface is
    /// registered only once the host confirms it; an unconfirmed handle is
    /// closed and the error returned. A freshly created surface is visible.
    pub fn create(
        &mut self,
        id: &ServerId,
        address: &str,
        devices: &DevicePreferences,
    ) -> Result<(), SurfaceError> {
        if self.surfaces.contains_key(id) {
            self.destroy(id);
        }

        let bounds = self.bounds();
        let surface = self.host.create_surface(SurfaceParams {
            id,
            address,
            bounds,
            devices,
        })?;

        if let Err(e) = self.host.confirm_surface(&surface) {
            if let Err(close_err) = self.host.close(surface) {
                warn!(server_id = %id, error = %close_err, "failed to close unconfirmed surface");
            }
            return Err(e);
        }

        self.surfaces.insert(
            id.clone(),
            Entry {
                surface,
                shown: true,
            },
        );
        debug!(server_id = %id, "surface registered");
        Ok(())
    }

    /// Make `id` the only visible surface: hide every other registered
    /// surface, then reposition, show and focus the target.
    ///
    /// No-op if `id` is not registered. Failures hiding siblings are logged
    /// and do not stop the target from being shown.
    pub fn show(&mut self, id: &ServerId) -> Result<(), SurfaceError> {
        if !self.surfaces.contains_key(id) {
            debug!(server_id = %id, "show ignored: no surface");
            return Ok(());
        }

        let bounds = self.bounds();
        let host = &self.host;
        for (other_id, entry) in self.surfaces.iter_mut().filter(|(k, _)| *k != id) {
            match host.set_visible(&entry.surface, false) {
                Ok(()) => entry.shown = false,
                Err(e) => warn!(server_id = %other_id, error = %e, "failed to hide surface"),
            }
        }

        let Some(entry) = self.surfaces.get_mut(id) else {
            return Ok(());
        };
        host.set_bounds(&entry.surface, bounds)?;
        host.set_visible(&entry.surface, true)?;
        entry.shown = true;
        host.focus(&entry.surface)?;
        Ok(())
    }

    /// Hide every registered surface. Individual failures are logged and
    /// skipped.
    pub fn hide_all(&mut self) {
        let host = &self.host;
        for (id, entry) in self.surfaces.iter_mut() {
            match host.set_visible(&entry.surface, false) {
                Ok(()) => entry.shown = false,
                Err(e) => warn!(server_id = %id, error = %e, "failed to hide surface"),
            }
        }
    }

    /// Unregister and close the surface for `id`.
    ///
    /// The entry is removed even if the host fails to close it. Returns
    /// whether a surface was registered.
    pub fn destroy(&mut self, id: &ServerId) -> bool {
        let Some(entry) = self.surfaces.remove(id) else {
            return false;
        };
        if let Err(e) = self.host.close(entry.surface) {
            warn!(server_id = %id, error = %e, "failed to close surface");
        }
        debug!(server_id = %id, "surface destroyed");
        true
    }

    /// Apply the current content bounds to every registered surface.
    pub fn resize_all(&mut self) {
        let bounds = self.bounds();
        for (id, entry) in &self.surfaces {
            if let Err(e) = self.host.set_bounds(&entry.surface, bounds) {
                warn!(server_id = %id, error = %e, "failed to resize surface");
            }
        }
    }

    /// Reload the content of `id` in place. No-op if not registered.
    pub fn reload(&mut self, id: &ServerId) -> Result<(), SurfaceError> {
        match self.surfaces.get(id) {
            Some(entry) => self.host.reload(&entry.surface),
            None => Ok(()),
        }
    }

    /// Destroy every surface. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for id in self.ids() {
            self.destroy(&id);
        }
    }

    pub fn contains(&self, id: &ServerId) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<ServerId> {
        let mut ids: Vec<ServerId> = self.surfaces.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Whether the surface for `id` was last made visible.
    pub fn is_shown(&self, id: &ServerId) -> bool {
        self.surfaces.get(id).is_some_and(|e| e.shown)
    }

    /// Ids of surfaces currently in the shown state.
    pub fn shown_ids(&self) -> Vec<ServerId> {
        let mut ids: Vec<ServerId> = self
            .surfaces
            .iter()
            .filter(|(_, e)| e.shown)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Content rectangle for the current viewport.
    pub fn bounds(&self) -> Rect {
        content_bounds(self.host.viewport(), &self.layout)
    }

    pub fn layout(&self) -> ChromeLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ChromeLayout) {
        self.layout = layout;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
