//! `fleetpkg config`: inspect and edit `~/.fleetpkg/config.yaml`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (server secrets are never shown)
    Show,
    /// Change one setting: ssh.port, ssh.timeout_secs or ssh.host_key_checking
    Set {
        key: String,
        value: String,
    },
}

/// # Errors
///
/// Returns an error if the file cannot be read or written, the server
/// registry is invalid, or the key/value is rejected.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    let store = &app.config_store;
    match cmd {
        ConfigCommand::Show => {
            let config = config_service::load_config(store)?;
            app.renderer().render_config(&config, &store.path()?)?;
        }
        ConfigCommand::Set { key, value } => {
            config_service::set_value(store, &key, &value)?;
            app.renderer().render_config_set(&key, &value)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
