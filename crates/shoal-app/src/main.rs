mod app_state;
mod cli;

use std::path::PathBuf;

use shoal_config::schema::LogLevel;
use shoal_config::{JsonStore, ShoalConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = shoal_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Shoal crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

/// Filter precedence: `--log-level`, then `RUST_LOG`, then the config level.
fn log_filter(cli_directive: Option<&str>, level: LogLevel) -> EnvFilter {
    if let Some(directive) = cli_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid --log-level '{directive}': {e}"),
        }
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shoal={}", level.as_directive())))
}

fn resolve_data_root(arg: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = arg {
        return Some(dir);
    }
    match shoal_platform::data_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!(error = %e, "no data directory; servers will share one web profile");
            None
        }
    }
}

fn open_store() -> JsonStore {
    let path = JsonStore::default_path().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using store.json in the working directory");
        PathBuf::from("store.json")
    });
    JsonStore::open(&path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "store unreadable, starting empty");
        JsonStore::empty(&path)
    })
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = match &args.config {
        Some(path) => shoal_config::load_config_from(path),
        None => shoal_config::load_config(),
    };
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref(), level))
        .init();

    tracing::info!("Shoal v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShoalConfig::default()
    });

    let data_root = resolve_data_root(args.data_dir);
    if let Some(ref root) = data_root {
        if let Err(e) = shoal_platform::ensure_dirs(root) {
            tracing::warn!("Failed to create directories: {e}");
        }
    }

    let store = open_store();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::ShoalApp::new(config, store, data_root);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let root = resolve_data_root(Some(PathBuf::from("/tmp/shoal-test-root")));
        assert_eq!(root, Some(PathBuf::from("/tmp/shoal-test-root")));
    }

    #[test]
    fn cli_directive_is_used_when_valid() {
        let filter = log_filter(Some("shoal_shell=trace"), LogLevel::Info);
        assert!(filter.to_string().contains("shoal_shell=trace"));
    }
}
