//! Execution outcomes and the install log rendered from them.

use fleetpkg_common::InstallOutput;

use crate::domain::compose::{ComposedCommand, PackageSelection};
use crate::domain::request::InstallMode;

pub const REPORT_HEADER: &str = "📦 Software Installation Log";
pub const SUCCESS_MARKER: &str = "✅ Installation command executed successfully";
pub const FAILURE_MARKER: &str = "❌ Installation failed";

/// What was asked for, as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub mode: InstallMode,
    pub package: String,
}

impl From<&PackageSelection> for RequestSummary {
    fn from(selection: &PackageSelection) -> Self {
        Self {
            mode: selection.mode(),
            package: selection.package().to_string(),
        }
    }
}

/// Result of running a composed command on its target server.
///
/// Transport failures are carried here as data rather than raised, since
/// partial output is still worth showing.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub command: ComposedCommand,
    pub success: bool,
    pub remote_output: String,
    pub failure_detail: Option<String>,
}

impl ExecutionOutcome {
    #[must_use]
    pub fn succeeded(command: ComposedCommand, remote_output: String) -> Self {
        Self {
            command,
            success: true,
            remote_output,
            failure_detail: None,
        }
    }

    #[must_use]
    pub fn failed(command: ComposedCommand, remote_output: String, detail: String) -> Self {
        Self {
            command,
            success: false,
            remote_output,
            failure_detail: Some(detail),
        }
    }

    #[must_use]
    pub fn to_output(&self) -> InstallOutput {
        InstallOutput {
            server: self.command.target().to_string(),
            command: self.command.text().to_string(),
            success: self.success,
            output: self.remote_output.clone(),
            failure: self.failure_detail.clone(),
        }
    }
}

/// Render the install log. Deterministic; the remote output is appended
/// verbatim and last.
#[must_use]
pub fn render_report(summary: &RequestSummary, outcome: &ExecutionOutcome) -> String {
    let mut log = String::new();
    log.push_str(REPORT_HEADER);
    log.push_str("\n\n");
    log.push_str(&format!("Server: {}\n", outcome.command.target()));
    log.push_str(&format!("Package: {} ({})\n", summary.package, summary.mode));
    log.push_str(&format!("Command: {}\n\n", outcome.command.text()));

    if outcome.success {
        log.push_str(SUCCESS_MARKER);
    } else {
        let detail = outcome.failure_detail.as_deref().unwrap_or("unknown error");
        log.push_str(&format!("{FAILURE_MARKER}: {detail}"));
    }
    log.push_str("\n\n");

    log.push_str("Output:\n");
    log.push_str(&outcome.remote_output);
    log
}
