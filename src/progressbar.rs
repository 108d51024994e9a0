use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {prefix:.bold} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}

/// Start a ticking spinner for a long step, drawn only on a terminal
pub fn spinner(step: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_prefix(step.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Stop the spinner, leaving `step` and a done marker on screen
pub fn finish(pb: &ProgressBar) {
    pb.finish_with_message("Done.");
}
