//! Progress bar styling options.

use indicatif::{ProgressBar, ProgressStyle};

/// Define the downloader style options.
///
/// By default the batch bar stays on screen once the batch is done.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the batch progress bar.
    pub(crate) batch: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            batch: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_MESSAGE.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(batch: ProgressBarOpts) -> Self {
        Self { batch }
    }

    /// Style options with the bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden())
    }

    /// Return `false` if the bar is disabled.
    pub fn is_enabled(&self) -> bool {
        self.batch.enabled
    }

    /// Get a reference to the batch progress bar options.
    pub fn batch(&self) -> &ProgressBarOpts {
        &self.batch
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Template with the bar, its position and the current file name.
    ///
    /// `████████████████████                    2/4 insta - jdoe -1700000000000 -2.jpg`
    pub const TEMPLATE_BAR_WITH_MESSAGE: &'static str = "{bar:40.green/black} {pos:>}/{len} {wide_msg}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = ProgressStyle::default_bar()
                .template(&template)
                .unwrap_or_else(|_| ProgressStyle::default_bar());
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_enabled() {
        let style = StyleOptions::default();
        assert!(style.is_enabled());
        assert!(!style.batch().clear);
    }

    #[test]
    fn test_hidden_bar() {
        let pb = ProgressBarOpts::hidden().to_progress_bar(10);
        assert!(pb.is_hidden());
        assert!(!StyleOptions::hidden().is_enabled());
    }

    #[test]
    fn test_invalid_template_falls_back() {
        let opts = ProgressBarOpts::new(Some("{bar:40.nope".to_string()), None, true, true);
        let pb = opts.to_progress_bar(3);
        assert_eq!(pb.length(), Some(3));
    }
}
