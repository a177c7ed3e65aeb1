//! Crash-safe file replacement shared by the config writer and the store.

use std::path::Path;

/// Write `contents` to `path` through a sibling `.tmp` file and a rename.
///
/// Parent directories are created. If the rename fails (some Windows
/// filesystems refuse to replace an open file) the file is written directly.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, contents)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, contents)?;
    }
    Ok(())
}
