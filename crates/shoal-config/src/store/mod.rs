//! App-managed key-value store persisted as one JSON object.
//!
//! Holds the records the settings UI edits: the server list, device
//! preferences, push-to-talk combination and appearance. Every `set` writes
//! the whole file through atomically.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use shoal_common::StoreError;
use tracing::{debug, info};

use crate::atomic::write_atomic;

/// Keys understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Servers,
    Devices,
    Ptt,
    Appearance,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Servers => "servers",
            StoreKey::Devices => "devices",
            StoreKey::Ptt => "ptt",
            StoreKey::Appearance => "appearance",
        }
    }
}

/// JSON object file with typed access by [`StoreKey`].
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonStore {
    /// `config_dir/shoal/store.json`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Read("could not determine config directory".into()))?;
        Ok(config_dir.join("shoal").join("store.json"))
    }

    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(&Self::default_path()?)
    }

    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// An unreadable or corrupt file is an error; callers that want to keep
    /// running use [`JsonStore::empty`] on the same path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no store found, starting empty");
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(StoreError::Read(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        let values = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(StoreError::Read(format!(
                    "{} does not contain a JSON object",
                    path.display()
                )))
            }
            Err(e) => {
                return Err(StoreError::Read(format!(
                    "failed to parse {}: {e}",
                    path.display()
                )))
            }
        };

        debug!(path = %path.display(), keys = values.len(), "store loaded");
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// An empty store that will write to `path` on the first `set`.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            values: Map::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the value under `key`. Absent or `null` is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StoreError> {
        match self.values.get(key.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StoreError::Deserialize {
                    key: key.as_str().into(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Replace the value under `key` and write the file.
    pub fn set<T: Serialize>(&mut self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|e| StoreError::Serialize {
            key: key.as_str().into(),
            reason: e.to_string(),
        })?;
        self.values.insert(key.as_str().into(), value);
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.values).map_err(|e| StoreError::Serialize {
            key: "*".into(),
            reason: e.to_string(),
        })?;
        write_atomic(&self.path, &text).map_err(|e| {
            StoreError::Write(format!("failed to write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "store saved");
        Ok(())
    }
}
