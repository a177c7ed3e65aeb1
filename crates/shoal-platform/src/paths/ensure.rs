use std::fs;
use std::path::Path;

use shoal_common::PlatformError;

use super::resolve::{config_dir, servers_dir};

/// Creates the config directory and `data_root/servers` if missing.
pub fn ensure_dirs(data_root: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(servers_dir(data_root))
        .map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
