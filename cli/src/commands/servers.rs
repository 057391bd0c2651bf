//! `fleetpkg servers`: list the server registry without secrets.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ServerRegistry;
use crate::application::services::config_service;
use crate::infra::registry::ConfigServerRegistry;

/// Run the servers command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let registry = ConfigServerRegistry::new(config.servers);
    app.renderer().render_servers(&registry.list())?;
    Ok(ExitCode::SUCCESS)
}
