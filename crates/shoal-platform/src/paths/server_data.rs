//! Per-server storage directories.
//!
//! Each server's web engine profile lives in its own directory so cookies
//! and local storage never leak between servers.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use std::time::Duration;

use shoal_common::{PlatformError, ServerId};
use tracing::{debug, warn};

use super::resolve::server_data_dir;

/// Attempts made to delete a server directory.
pub const REMOVE_ATTEMPTS: u32 = 15;

/// Delay between deletion attempts. The web engine can hold file locks for
/// a short while after its surface is closed.
pub const REMOVE_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Create (if needed) and return the storage directory for `id`.
pub fn prepare_server_data_dir(data_root: &Path, id: &ServerId) -> Result<PathBuf, PlatformError> {
    let dir = server_data_dir(data_root, id)?;
    std::fs::create_dir_all(&dir).map_err(|e| {
        PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
    })?;
    Ok(dir)
}

/// Delete `dir` recursively, retrying up to `attempts` times.
///
/// Returns `true` once the directory is gone (including when it never
/// existed), `false` if every attempt failed.
pub fn remove_dir_with_retry(dir: &Path, attempts: u32, delay: Duration) -> bool {
    for attempt in 1..=attempts {
        match std::fs::remove_dir_all(dir) {
            Ok(()) => {
                debug!(path = %dir.display(), attempt, "server data removed");
                return true;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return true,
            Err(e) => {
                debug!(path = %dir.display(), attempt, error = %e, "server data still locked");
                if attempt < attempts {
                    std::thread::sleep(delay);
                }
            }
        }
    }
    warn!(path = %dir.display(), attempts, "giving up on removing server data");
    false
}

/// Delete the storage directory for `id` on a background thread.
pub fn spawn_remove_server_data(
    data_root: &Path,
    id: &ServerId,
) -> Result<JoinHandle<bool>, PlatformError> {
    let dir = server_data_dir(data_root, id)?;
    std::thread::Builder::new()
        .name(format!("shoal-rm-{id}"))
        .spawn(move || remove_dir_with_retry(&dir, REMOVE_ATTEMPTS, REMOVE_RETRY_DELAY))
        .map_err(|e| PlatformError::PathError(format!("failed to spawn cleanup thread: {e}")))
}
