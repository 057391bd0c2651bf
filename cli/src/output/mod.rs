//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use fleetpkg_common::{CatalogItem, InstallOutput, ServerSummary};
use owo_colors::OwoColorize as _;
pub use styles::Styles;

pub use human::HumanRenderer;
pub use json::JsonRenderer;

use crate::domain::FleetConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let styles = if use_colors {
            Styles::colored()
        } else {
            Styles::default()
        };

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.heading));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.muted));
        }
    }
}

/// Output-mode dispatch: one variant per renderer.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_catalog(&self, items: &[CatalogItem]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_catalog(items);
                Ok(())
            }
            Self::Json(r) => r.render_catalog(items),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_servers(&self, servers: &[ServerSummary]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_servers(servers);
                Ok(())
            }
            Self::Json(r) => r.render_servers(servers),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &FleetConfig, path: &std::path::Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_set(key, value);
                Ok(())
            }
            Self::Json(r) => r.render_config_set(key, value),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_dry_run(&self, server: &str, command: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_dry_run(server, command);
                Ok(())
            }
            Self::Json(r) => r.render_dry_run(server, command),
        }
    }

    /// Human mode prints the install log; JSON mode prints the structured
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_install(&self, log: &str, output: &InstallOutput) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_install_log(log);
                Ok(())
            }
            Self::Json(r) => r.render_install(output),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
