//! Spinner shown while the package manager resolves dependencies
//!
//! `swift package update` can take minutes on a cold cache, so an indicatif
//! spinner with elapsed time is drawn on stderr until it exits.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress reporter for the dependency resolution step
pub struct Progress {
    /// Whether progress display is enabled (disabled in quiet mode)
    enabled: bool,
    /// Spinner while a resolution is running
    bar: Option<ProgressBar>,
}

fn resolving_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        .expect("Invalid template")
}

impl Progress {
    /// Create a new progress reporter
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Returns true while a spinner is drawn
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Start the spinner for resolving the package in `package_dir`
    pub fn start_resolving(&mut self, package_dir: &Path) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(resolving_style());
        spinner.set_message(format!(
            "Resolving dependency updates for {}",
            package_dir.display()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(spinner);
    }

    /// Stop and erase the spinner
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
