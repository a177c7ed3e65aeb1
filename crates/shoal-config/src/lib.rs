//! Shoal configuration and persistence.
//!
//! Two independent stores live here:
//! - `config.toml`: user-editable application settings (window, chrome
//!   layout, webview flags, logging). Every section has defaults, so partial
//!   files work.
//! - `store.json`: the app-managed key-value store holding the server list,
//!   device preferences, push-to-talk config and appearance.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shoal_config::{load_config, JsonStore};
//!
//! let config = load_config().expect("failed to load config");
//! let store = JsonStore::open_default().expect("failed to open store");
//! println!("sidebar width: {}", config.layout.sidebar_width);
//! ```

mod atomic;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod validation;

pub use schema::ShoalConfig;
pub use store::{JsonStore, StoreKey};

use shoal_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default `config.toml` if none exists.
pub fn load_config() -> Result<ShoalConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &std::path::Path) -> Result<ShoalConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
