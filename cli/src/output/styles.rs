//! Terminal stylesheet.

use owo_colors::Style;

/// Styles for every kind of line the CLI prints. `Default` is the plain,
/// uncolored sheet.
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub failure: Style,
    pub warning: Style,
    pub info: Style,
    /// Secondary text: labels, catalog install verbs.
    pub muted: Style,
    pub heading: Style,
    /// Composed command lines, so they stand out from surrounding prose.
    pub command: Style,
}

impl Styles {
    /// The colored sheet used on a TTY.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            failure: Style::new().red().bold(),
            warning: Style::new().yellow(),
            info: Style::new().blue(),
            muted: Style::new().dimmed(),
            heading: Style::new().bold().cyan(),
            command: Style::new().bright_white().bold(),
        }
    }
}
