//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::ShoalConfig;
use shoal_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShoalConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    misc::validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
