//! Reading and writing the persistent store.
//!
//! Every read failure degrades to the default value; the shell is marked
//! loaded either way so the UI never waits on a broken file.

use serde::de::DeserializeOwned;
use serde::Serialize;

use shoal_common::{Appearance, DevicePreferences, Server};
use shoal_config::{JsonStore, StoreKey};
use shoal_platform::PttConfig;

use super::core::ShoalApp;

fn read_or_default<T: DeserializeOwned + Default>(store: &JsonStore, key: StoreKey) -> T {
    match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key = key.as_str(), error = %e, "stored value unusable, using default");
            T::default()
        }
    }
}

impl ShoalApp {
    /// Populate shell state and push-to-talk from the store.
    pub(super) fn load_persisted(&mut self) {
        let servers: Vec<Server> = read_or_default(&self.store, StoreKey::Servers);
        let devices: DevicePreferences = read_or_default(&self.store, StoreKey::Devices);
        let appearance: Appearance = read_or_default(&self.store, StoreKey::Appearance);
        let ptt: PttConfig = read_or_default(&self.store, StoreKey::Ptt);

        tracing::info!(
            servers = servers.len(),
            path = %self.store.path().display(),
            "persisted state loaded"
        );

        self.state.load(servers, devices, appearance);
        self.ptt.configure(ptt);
    }

    /// Save the server list. Skipped until the initial load completed so an
    /// empty in-memory list never overwrites stored servers.
    pub(super) fn persist_servers(&mut self) {
        if !self.state.is_loaded() {
            tracing::debug!("servers not loaded yet, skipping save");
            return;
        }
        write(&mut self.store, StoreKey::Servers, &self.state.servers());
    }

    pub(super) fn persist_devices(&mut self) {
        write(&mut self.store, StoreKey::Devices, self.state.devices());
    }

    pub(super) fn persist_ptt(&mut self) {
        write(&mut self.store, StoreKey::Ptt, self.ptt.config());
    }

    pub(super) fn persist_appearance(&mut self) {
        write(&mut self.store, StoreKey::Appearance, self.state.appearance());
    }
}

fn write<T: Serialize + ?Sized>(store: &mut JsonStore, key: StoreKey, value: &T) {
    if let Err(e) = store.set(key, &value) {
        tracing::error!(key = key.as_str(), error = %e, "failed to persist");
    }
}
