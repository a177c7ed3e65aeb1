use std::path::{Component, Path, PathBuf};

use shoal_common::{PlatformError, ServerId};

pub(super) const APP_NAME: &str = "shoal";

/// Returns the platform-specific configuration directory for Shoal.
///
/// - macOS: `~/Library/Application Support/shoal`
/// - Linux: `$XDG_CONFIG_HOME/shoal` (defaults to `~/.config/shoal`)
/// - Windows: `%APPDATA%\shoal`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Shoal.
///
/// - macOS: `~/Library/Application Support/shoal`
/// - Linux: `$XDG_DATA_HOME/shoal` (defaults to `~/.local/share/shoal`)
/// - Windows: `%APPDATA%\shoal`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the crash report directory, `data_dir()/logs/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs").join("crash-reports"))
}

/// Parent of every per-server storage directory under `data_root`.
pub fn servers_dir(data_root: &Path) -> PathBuf {
    data_root.join("servers")
}

/// Storage directory (cookies, local storage, cache) for one server.
///
/// The id must be a single plain path component so the result always stays
/// directly under `servers/`.
pub fn server_data_dir(data_root: &Path, id: &ServerId) -> Result<PathBuf, PlatformError> {
    let mut components = Path::new(id.as_str()).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == id.as_str() => {
            Ok(servers_dir(data_root).join(name))
        }
        _ => Err(PlatformError::PathError(format!(
            "server id {:?} is not a valid directory name",
            id.as_str()
        ))),
    }
}
