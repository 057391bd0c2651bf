//! Spinners shown while a remote command runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];
const RUNNING: &str = "  {spinner:.cyan} {msg}";
const FINISHED: &str = "  {prefix} {msg}";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Start a ticking spinner with `msg` beside it.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner()
        .with_style(style(RUNNING).tick_strings(TICKS))
        .with_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    finish(pb, "✓", msg);
}

pub fn finish_warn(pb: &ProgressBar, msg: &str) {
    finish(pb, "!", msg);
}

/// Replace the spinner glyph with `mark` and leave the final line visible.
fn finish(pb: &ProgressBar, mark: &str, msg: &str) {
    pb.set_style(style(FINISHED));
    pb.set_prefix(mark.to_string());
    pb.finish_with_message(msg.to_string());
}
