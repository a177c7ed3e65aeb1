//! Top-level shell state: servers, navigation, overlays, preferences.

use serde::Serialize;
use shoal_common::{ActiveView, Appearance, DevicePreferences, Server, ServerId};

use crate::overlay::OverlaySet;

/// Everything the shell view renders and the visibility rule reads.
///
/// Every mutation bumps [`generation`](ShellState::generation), which the
/// lifecycle controller uses to re-evaluate surface visibility exactly once
/// per change.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub(crate) servers: Vec<Server>,
    pub(crate) active: ActiveView,
    pub(crate) overlays: OverlaySet,
    pub(crate) devices: DevicePreferences,
    pub(crate) appearance: Appearance,
    pub(crate) loaded: bool,
    pub(crate) generation: u64,
}

/// Serialized form sent to the shell view as `shell_state`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellSnapshot<'a> {
    pub servers: &'a [Server],
    pub active_view: &'a ActiveView,
    pub overlays: Vec<&'a str>,
    pub devices: &'a DevicePreferences,
    pub loaded: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn server(&self, id: &ServerId) -> Option<&Server> {
        self.servers.iter().find(|s| &s.id == id)
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    /// The active server, if the active view names a known one.
    pub fn active_server(&self) -> Option<&Server> {
        self.active.server_id().and_then(|id| self.server(id))
    }

    pub fn overlays(&self) -> &OverlaySet {
        &self.overlays
    }

    pub fn devices(&self) -> &DevicePreferences {
        &self.devices
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Whether persisted state has been loaded (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Install persisted state. Called once at startup, even when the store
    /// could not be read, so the shell is never left waiting.
    pub fn load(
        &mut self,
        servers: Vec<Server>,
        devices: DevicePreferences,
        appearance: Appearance,
    ) {
        self.servers = servers;
        self.devices = devices;
        self.appearance = appearance;
        self.loaded = true;
        self.touch();
    }

    pub(crate) fn set_active(&mut self, view: ActiveView) {
        self.active = view;
        self.touch();
    }

    pub fn open_overlay(&mut self, name: impl Into<String>) -> bool {
        let opened = self.overlays.open(name);
        if opened {
            self.touch();
        }
        opened
    }

    pub fn close_overlay(&mut self, name: &str) -> bool {
        let closed = self.overlays.close(name);
        if closed {
            self.touch();
        }
        closed
    }

    /// Close every overlay, e.g. after the shell view reloads.
    pub fn clear_overlays(&mut self) {
        if self.overlays.any_open() {
            self.overlays.clear();
            self.touch();
        }
    }

    pub(crate) fn set_devices(&mut self, devices: DevicePreferences) {
        self.devices = devices;
        self.touch();
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.touch();
    }

    pub fn snapshot(&self) -> ShellSnapshot<'_> {
        ShellSnapshot {
            servers: &self.servers,
            active_view: &self.active,
            overlays: self.overlays.names().collect(),
            devices: &self.devices,
            loaded: self.loaded,
        }
    }
}
