//! Progress display for catalog fetches

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a bundle is pulled from the catalog
pub fn fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish and clear a fetch spinner
pub fn finish(pb: ProgressBar) {
    pb.finish_and_clear();
}
