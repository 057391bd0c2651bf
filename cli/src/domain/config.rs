//! Domain types and validators for fleetpkg configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::HashSet;

use anyhow::Result;
use fleetpkg_common::ServerProfile;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::request::validate_server_address;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["ssh.port", "ssh.timeout_secs", "ssh.host_key_checking"];
pub const VALID_HOST_KEY_CHECKING: &[&str] = &["yes", "no", "accept-new"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.fleetpkg/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FleetConfig {
    /// Transport settings.
    pub ssh: SshSettings,
    /// Server registry.
    pub servers: Vec<ServerProfile>,
}

/// Settings for the ssh transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SshSettings {
    /// Remote ssh port.
    pub port: u16,
    /// Upper bound for a whole remote install, in seconds.
    pub timeout_secs: u64,
    /// Value passed to `StrictHostKeyChecking`.
    pub host_key_checking: String,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            port: 22,
            timeout_secs: 600,
            host_key_checking: "accept-new".to_string(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid: valid.to_string(),
    };
    match key {
        "ssh.port" => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(()),
            _ => Err(invalid("1-65535").into()),
        },
        "ssh.timeout_secs" => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(()),
            _ => Err(invalid("a positive number of seconds").into()),
        },
        "ssh.host_key_checking" if !VALID_HOST_KEY_CHECKING.contains(&value) => {
            Err(invalid(&VALID_HOST_KEY_CHECKING.join(", ")).into())
        }
        _ => Ok(()),
    }
}

/// Validate then write `value` into `config` at `key`.
///
/// # Errors
///
/// Returns an error if the key or value is invalid.
pub fn apply_config_value(config: &mut FleetConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "ssh.port" => config.ssh.port = value.parse()?,
        "ssh.timeout_secs" => config.ssh.timeout_secs = value.parse()?,
        "ssh.host_key_checking" => config.ssh.host_key_checking = value.to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

/// Validate ssh settings loaded from the config file with the same rules
/// `config set` enforces per key.
///
/// # Errors
///
/// Returns an error naming the first setting that is out of range.
pub fn validate_ssh_settings(ssh: &SshSettings) -> Result<()> {
    validate_config_value("ssh.port", &ssh.port.to_string())?;
    validate_config_value("ssh.timeout_secs", &ssh.timeout_secs.to_string())?;
    validate_config_value("ssh.host_key_checking", &ssh.host_key_checking)
}

/// Validate the server registry section.
///
/// # Errors
///
/// Returns an error for an empty or option-like address, an empty user, or
/// an address registered twice.
pub fn validate_servers(servers: &[ServerProfile]) -> Result<()> {
    let mut seen = HashSet::new();
    for server in servers {
        if let Err(e) = validate_server_address(&server.address) {
            return Err(ConfigError::InvalidServer {
                address: server.address.clone(),
                reason: e.to_string(),
            }
            .into());
        }
        if server.user.trim().is_empty() {
            return Err(ConfigError::InvalidServer {
                address: server.address.clone(),
                reason: "user is required".to_string(),
            }
            .into());
        }
        if !seen.insert(server.address.as_str()) {
            return Err(ConfigError::DuplicateServer(server.address.clone()).into());
        }
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
