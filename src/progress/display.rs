//! Progress bar display for a batch of image downloads.

use crate::progress::StyleOptions;
use indicatif::ProgressBar;

/// Progress display for one batch.
pub struct ProgressDisplay {
    bar: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a progress display for `total` images.
    pub fn new(style_options: StyleOptions, total: usize) -> Self {
        let bar = style_options.batch().clone().to_progress_bar(total as u64);
        if style_options.is_enabled() {
            bar.tick();
        }
        Self { bar, style_options }
    }

    /// Show the name of the file being downloaded.
    pub fn set_current(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
    }

    /// Advance by one image.
    pub fn increment(&self) {
        self.bar.inc(1);
    }

    /// Finish the display, clearing or keeping the bar based on configuration.
    pub fn finish(self) {
        if self.style_options.batch().clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish_with_message("done");
        }
    }
}
