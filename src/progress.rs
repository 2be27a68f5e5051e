//! Progress bar display for batch extractions

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for batch extractions
pub struct ExtractProgress {
    bar: ProgressBar,
}

impl ExtractProgress {
    /// Create a new progress display with the total route count
    pub fn new(total_routes: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_routes);
        bar.set_style(style);
        Self { bar }
    }

    /// Show the route currently being extracted
    pub fn update_route(&self, pattern: &str, current: usize, total: usize) {
        self.bar.set_message(format!("({current}/{total}) {pattern}"));
    }

    /// Increment route progress
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
