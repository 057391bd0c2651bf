//! `fleetpkg install`: compose and run an install command on one server.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{config_service, install};
use crate::domain::InstallRequest;
use crate::infra::registry::ConfigServerRegistry;
use crate::output::reporter::{SilentReporter, TerminalReporter};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Address of a registered server
    #[arg(long, short = 's')]
    pub server: String,

    /// Package source: `common` (catalog key) or `custom` (free-text name)
    #[arg(long, short = 'm', default_value = "common")]
    pub mode: String,

    /// Catalog key, or package name in custom mode
    pub package: String,

    /// Print the composed command (secret included) without executing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the install command.
///
/// Rejected requests return an error before anything is executed. An
/// executed install always prints its report; a failed remote command exits
/// with status 1 without an additional error message.
///
/// # Errors
///
/// Returns an error if the request is rejected, the configuration cannot be
/// loaded, or output cannot be rendered.
pub async fn run(app: &AppContext, args: &InstallArgs) -> Result<ExitCode> {
    let request = InstallRequest::parse(&args.server, &args.mode, &args.package)?;
    let config = config_service::load_config(&app.config_store)?;
    let registry = ConfigServerRegistry::new(config.servers.clone());
    let prepared = install::prepare_install(&registry, &request)?;
    let renderer = app.renderer();

    if args.dry_run {
        renderer.render_dry_run(prepared.command.target(), prepared.command.text())?;
        return Ok(ExitCode::SUCCESS);
    }

    let prompt = format!(
        "Install {} on {}?",
        prepared.selection.package(),
        prepared.profile.address
    );
    if !app.confirm(&prompt, true)? {
        app.output.info("Cancelled. Nothing was executed.");
        return Ok(ExitCode::SUCCESS);
    }

    let executor = app.executor(&config.ssh);
    let report = if app.is_json() {
        install::execute_install(&executor, &SilentReporter, prepared).await
    } else {
        let reporter = TerminalReporter::new(&app.output);
        install::execute_install(&executor, &reporter, prepared).await
    };

    renderer.render_install(&report.log, &report.outcome.to_output())?;
    Ok(if report.outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
