//! Human-readable terminal renderer.

use fleetpkg_common::{CatalogItem, PrivilegeMode, ServerSummary};
use owo_colors::OwoColorize as _;

use crate::domain::FleetConfig;
use crate::domain::report::{FAILURE_MARKER, SUCCESS_MARKER};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("fleetpkg {version}");
    }

    /// Render the curated package catalog.
    pub fn render_catalog(&self, items: &[CatalogItem]) {
        println!();
        self.ctx.header("Available packages:");
        println!();
        for item in items {
            println!(
                "  {:<12} {:<42} {}",
                item.name,
                item.description,
                item.command.style(self.ctx.styles.muted)
            );
        }
        println!();
        println!("  Install one: fleetpkg install --server <address> --mode common <name>");
    }

    /// Render the server registry.
    pub fn render_servers(&self, servers: &[ServerSummary]) {
        if servers.is_empty() {
            if !self.ctx.quiet {
                println!("No servers registered. Add them under 'servers:' in the config file.");
            }
            return;
        }
        println!();
        self.ctx.header("Registered servers:");
        println!();
        for server in servers {
            let family = match server.privilege {
                PrivilegeMode::Root => "root, apk",
                PrivilegeMode::Sudo => "sudo, apt",
            };
            println!("  {:<24} {:<12} {family}", server.address, server.user);
        }
        println!();
    }

    /// Render the effective configuration. Secrets are never printed.
    pub fn render_config(&self, config: &FleetConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.heading)
        );
        println!();
        println!("  {:<24} {}", "ssh.port:", config.ssh.port);
        println!("  {:<24} {}", "ssh.timeout_secs:", config.ssh.timeout_secs);
        println!("  {:<24} {}", "ssh.host_key_checking:", config.ssh.host_key_checking);
        println!("  {:<24} {}", "servers:", config.servers.len());
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.heading));
        for var in ["FLEETPKG_CONFIG", "FLEETPKG_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    pub fn render_config_set(&self, key: &str, value: &str) {
        self.ctx.success(&format!("Set {key} = {value}"));
    }

    /// Render a composed command that was not executed.
    pub fn render_dry_run(&self, server: &str, command: &str) {
        self.ctx.kv("Server:", server);
        println!(
            "  {}  {}",
            "Command:".style(self.ctx.styles.muted),
            command.style(self.ctx.styles.command)
        );
        self.ctx.info("Dry run: nothing was executed.");
    }

    /// Print the install log, coloring its outcome marker line.
    pub fn render_install_log(&self, log: &str) {
        println!();
        for line in log.lines() {
            if line.starts_with(SUCCESS_MARKER) {
                println!("{}", line.style(self.ctx.styles.success));
            } else if line.starts_with(FAILURE_MARKER) {
                println!("{}", line.style(self.ctx.styles.failure));
            } else {
                println!("{line}");
            }
        }
    }
}
