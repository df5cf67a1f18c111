//! Configuration structures and defaults for the batch downloader.

use super::summary::Summary;
use crate::progress::StyleOptions;

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for per-image completion events.
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Delay between two consecutive images.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Leading part of every saved file name.
pub const DEFAULT_FILENAME_PREFIX: &str = "insta";

/// Configuration structure for the downloader.
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Fixed pause after every image except the last.
    pub pacing: Duration,
    /// Leading part of the file names.
    pub filename_prefix: String,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Callback for when each image completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("pacing", &self.pacing)
            .field("filename_prefix", &self.filename_prefix)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            pacing: DEFAULT_PACING,
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
