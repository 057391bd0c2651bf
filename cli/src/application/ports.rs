//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`: never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;
use fleetpkg_common::{ServerProfile, ServerSummary};

use crate::domain::FleetConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts local process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program with stdin piped from `stdin` and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout, the child process must be killed.
    async fn run_with_stdin(&self, program: &str, args: &[&str], stdin: &[u8]) -> Result<Output>;
}

// ── Remote Execution Port ─────────────────────────────────────────────────────

/// Captured result of a command that ran on a remote server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    /// Standard output followed by standard error.
    pub output: String,
    /// Remote exit code; `None` when the session ended on a signal.
    pub exit_code: Option<i32>,
}

impl RemoteOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs one composed command line on a server. The transport, its
/// authentication and its timeout are entirely the implementation's concern.
#[allow(async_fn_in_trait)]
pub trait RemoteExecutor {
    /// Execute `command` on `profile`'s server and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport itself fails (spawn failure,
    /// timeout). A command that ran and exited non-zero is `Ok`.
    async fn run_remote_command(&self, profile: &ServerProfile, command: &str)
    -> Result<RemoteOutput>;
}

// ── Registry Port ─────────────────────────────────────────────────────────────

/// Read-only view of the managed server registry.
pub trait ServerRegistry {
    /// Find the profile registered for `address` (exact match).
    fn lookup(&self, address: &str) -> Option<ServerProfile>;
    /// Secret-free summaries of every registered server.
    fn list(&self) -> Vec<ServerSummary>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, returning defaults when none exists.
    fn load(&self) -> Result<FleetConfig>;
    /// Persist configuration.
    fn save(&self, config: &FleetConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
