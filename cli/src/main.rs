//! fleetpkg - Install packages on managed servers

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleetpkg_cli::cli::Cli;
use fleetpkg_cli::domain::InstallError;
use fleetpkg_cli::output::json::format_error;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FLEETPKG_LOG").unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    let json = cli.global.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            let rejection = e.downcast_ref::<InstallError>();
            if json {
                let code = rejection.map_or("error", InstallError::code);
                let status = rejection.map(|r| r.status().http_code());
                match format_error(&format!("{e:#}"), code, status) {
                    Ok(text) => println!("{text}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
