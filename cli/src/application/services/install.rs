//! Application service: install-package use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! One request makes one linear pass and ends in one of two states:
//! rejected (an `InstallError` before any remote call) or executed (an
//! `InstallReport`, whether or not the remote command succeeded).

use fleetpkg_common::ServerProfile;

use crate::application::ports::{ProgressReporter, RemoteExecutor, ServerRegistry};
use crate::domain::{
    ComposedCommand, ExecutionOutcome, InstallError, InstallRequest, PackageSelection,
    RequestSummary, compose, render_report,
};

/// A request that passed validation and lookup, with its command composed.
#[derive(Debug)]
pub struct PreparedInstall {
    pub profile: ServerProfile,
    pub selection: PackageSelection,
    pub command: ComposedCommand,
}

impl PreparedInstall {
    #[must_use]
    pub fn summary(&self) -> RequestSummary {
        RequestSummary::from(&self.selection)
    }
}

/// The executed state: outcome plus the rendered install log.
#[derive(Debug)]
pub struct InstallReport {
    pub outcome: ExecutionOutcome,
    pub log: String,
}

/// Validate, look up and compose without touching the network.
///
/// # Errors
///
/// Returns `ServerNotFound` for an unregistered address,
/// `CatalogKeyNotFound` for an unlisted catalog key and `EmptyPackageName`
/// when a custom name sanitizes to nothing.
pub fn prepare_install(
    registry: &impl ServerRegistry,
    request: &InstallRequest,
) -> Result<PreparedInstall, InstallError> {
    let result = prepare(registry, request);
    if let Err(e) = &result {
        tracing::warn!(
            server = %request.server_address,
            mode = %request.mode,
            kind = ?e.kind(),
            code = e.code(),
            "install request rejected"
        );
    }
    result
}

fn prepare(
    registry: &impl ServerRegistry,
    request: &InstallRequest,
) -> Result<PreparedInstall, InstallError> {
    let profile = registry
        .lookup(&request.server_address)
        .ok_or_else(|| InstallError::ServerNotFound(request.server_address.clone()))?;
    let selection = PackageSelection::from_request(request)?;
    let command = compose(&selection, &profile)?;
    tracing::debug!(
        server = %profile.address,
        privilege = %profile.privilege(),
        command = command.redacted(),
        "install command composed"
    );
    Ok(PreparedInstall {
        profile,
        selection,
        command,
    })
}

/// Run a prepared command once and render its report. Never retries;
/// transport failures are captured in the outcome.
pub async fn execute_install(
    executor: &impl RemoteExecutor,
    reporter: &impl ProgressReporter,
    prepared: PreparedInstall,
) -> InstallReport {
    let summary = prepared.summary();
    let PreparedInstall {
        profile, command, ..
    } = prepared;

    reporter.step(&format!(
        "Installing {} on {}...",
        summary.package, profile.address
    ));
    tracing::info!(
        server = %profile.address,
        package = %summary.package,
        "executing remote install"
    );

    let outcome = match executor.run_remote_command(&profile, command.text()).await {
        Ok(remote) if remote.success() => {
            reporter.success(&format!("Installed {} on {}", summary.package, profile.address));
            ExecutionOutcome::succeeded(command, remote.output)
        }
        Ok(remote) => {
            let detail = match remote.exit_code {
                Some(code) => format!("remote command exited with status {code}"),
                None => "remote command terminated by signal".to_string(),
            };
            reporter.warn(&format!("Install failed on {}: {detail}", profile.address));
            ExecutionOutcome::failed(command, remote.output, detail)
        }
        Err(e) => {
            let detail = format!("{e:#}");
            reporter.warn(&format!("Install failed on {}: {detail}", profile.address));
            ExecutionOutcome::failed(command, String::new(), detail)
        }
    };

    if let Some(detail) = &outcome.failure_detail {
        tracing::warn!(server = %profile.address, detail = %detail, "remote install failed");
    } else {
        tracing::info!(server = %profile.address, "remote install finished");
    }

    let log = render_report(&summary, &outcome);
    InstallReport { outcome, log }
}

/// The whole pipeline: prepare, then execute.
///
/// # Errors
///
/// Returns the rejection from [`prepare_install`]; execution failures are
/// reported inside the `InstallReport`.
pub async fn install_package(
    registry: &impl ServerRegistry,
    executor: &impl RemoteExecutor,
    reporter: &impl ProgressReporter,
    request: &InstallRequest,
) -> Result<InstallReport, InstallError> {
    let prepared = prepare_install(registry, request)?;
    Ok(execute_install(executor, reporter, prepared).await)
}
