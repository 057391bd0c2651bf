//! `fleetpkg catalog`: list the curated packages.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::catalog;

/// Run the catalog command.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let items: Vec<_> = catalog::entries().iter().map(|e| e.to_item()).collect();
    app.renderer().render_catalog(&items)?;
    Ok(ExitCode::SUCCESS)
}
