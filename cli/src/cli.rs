//! Command-line surface.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// Install packages on managed servers
#[derive(Parser)]
#[command(
    name = "fleetpkg",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Print results and errors as JSON; implies --yes
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print reports and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never color output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Assume "yes" at confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install a package on a registered server
    ///
    /// The report, --dry-run and --json output show the exact command,
    /// including the sudo password of non-root servers.
    Install(commands::install::InstallArgs),

    /// List the curated package catalog
    Catalog,

    /// List registered servers and how they are elevated
    Servers,

    /// Show or change settings
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Dispatch the parsed subcommand.
    ///
    /// # Errors
    ///
    /// Returns the rejection or failure of the subcommand.
    pub async fn run(self) -> Result<ExitCode> {
        let app = AppContext::new(&self.global);
        match self.command {
            Command::Install(args) => commands::install::run(&app, &args).await,
            Command::Catalog => commands::catalog::run(&app),
            Command::Servers => commands::servers::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
