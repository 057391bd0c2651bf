//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the JSON renderer for successful results.

use anyhow::{Context, Result};
use fleetpkg_common::{CatalogItem, InstallOutput, ServerProfile, ServerSummary};
use serde::Serialize;

use crate::domain::FleetConfig;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "...",
///   "status": 400
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice: `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str, status: Option<u16>) -> Result<String> {
    let mut obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    if let Some(status) = status {
        obj["status"] = serde_json::json!(status);
    }
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{text}");
        Ok(())
    }

    pub fn render_catalog(&self, items: &[CatalogItem]) -> Result<()> {
        Self::print(&items)
    }

    pub fn render_servers(&self, servers: &[ServerSummary]) -> Result<()> {
        Self::print(&servers)
    }

    pub fn render_dry_run(&self, server: &str, command: &str) -> Result<()> {
        Self::print(&serde_json::json!({
            "server": server,
            "command": command,
            "executed": false,
        }))
    }

    pub fn render_install(&self, output: &InstallOutput) -> Result<()> {
        Self::print(output)
    }

    /// Servers are listed as secret-free summaries.
    pub fn render_config(&self, config: &FleetConfig, path: &std::path::Path) -> Result<()> {
        Self::print(&serde_json::json!({
            "path": path.display().to_string(),
            "ssh": config.ssh,
            "servers": config
                .servers
                .iter()
                .map(ServerProfile::summary)
                .collect::<Vec<_>>(),
        }))
    }

    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "key": key, "value": value, "saved": true }))
    }

    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "version": version }))
    }
}
