use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_secrets;

/// Writes a crash report for a panic into `crash_report_dir()`.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let message = panic_message(info);
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(&message, location.as_deref(), &backtrace);
    write_report(&crash_report_dir().ok()?, &report)
}

fn panic_message(info: &PanicHookInfo) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Report body with invite codes and credentials redacted.
pub(super) fn build_report(message: &str, location: Option<&str>, backtrace: &str) -> Value {
    json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "thread": std::thread::current().name().unwrap_or("unnamed"),
        "panic_message": sanitize_secrets(message),
        "location": location,
        "backtrace": sanitize_secrets(backtrace),
    })
}

/// Write `report` as `crash_<timestamp>.json` in `dir`. On Unix the file is
/// readable by its owner only.
pub(super) fn write_report(dir: &Path, report: &Value) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("crash_{timestamp}.json"));

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
