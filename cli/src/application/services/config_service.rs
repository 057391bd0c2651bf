//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    FleetConfig, apply_config_value, validate_servers, validate_ssh_settings,
};

/// Load configuration and validate its ssh settings and server registry.
///
/// # Errors
///
/// Returns an error if the store cannot be read, a setting is out of range,
/// or the registry is invalid.
pub fn load_config(store: &impl ConfigStore) -> Result<FleetConfig> {
    let config = store.load()?;
    validate_ssh_settings(&config.ssh)?;
    validate_servers(&config.servers)?;
    Ok(config)
}

/// Set a single whitelisted key and persist the result.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or persisting fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<FleetConfig> {
    let mut config = load_config(store)?;
    apply_config_value(&mut config, key, value)?;
    store.save(&config)?;
    tracing::info!(key, value, "configuration updated");
    Ok(config)
}
