//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod load;
mod window;


use crate::schema::PortholeConfig;
use porthole_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PortholeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.app.name.trim().is_empty() {
        errors.push("app.name must not be empty".into());
    }

    window::validate_window(&mut errors, config);
    load::validate_load(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
