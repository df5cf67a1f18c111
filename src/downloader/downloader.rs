//! Core batch downloader implementation.
//!
//! [`BatchDownloader::download`] walks the URLs strictly in order, one at a
//! time. For each URL it fetches the bytes, builds a file name from the owner,
//! the capture time and the 1-based position, saves the bytes, and releases
//! them. Between two images it sleeps for the configured pacing interval.
//! Failures are recorded per image and the loop moves on.

use super::config::DownloaderConfig;
use super::fetch::{ImageFetcher, ImageSink};
use super::summary::Summary;
use crate::error::ItemDownloadError;
use crate::progress::display::ProgressDisplay;

use chrono::Utc;
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Builds the saved file name for one image.
///
/// `position` is 1-based. Path separators in the owner are replaced with
/// `_` so the name always stays inside the target directory.
///
/// ```rust
/// use postrip::downloader::item_filename;
///
/// assert_eq!(
///     item_filename("insta", "jdoe", 1700000000000, 1),
///     "insta - jdoe -1700000000000 -1.jpg"
/// );
/// ```
pub fn item_filename(prefix: &str, owner: &str, timestamp_millis: i64, position: usize) -> String {
    let owner = owner.replace(['/', '\\'], "_");
    format!("{} - {} -{} -{}.jpg", prefix, owner, timestamp_millis, position)
}

/// Represents the batch download controller.
///
/// A downloader is created via [`BatchDownloaderBuilder`](super::BatchDownloaderBuilder).
#[derive(Clone)]
pub struct BatchDownloader<F, S> {
    config: DownloaderConfig,
    fetcher: F,
    sink: S,
}

impl<F, S> fmt::Debug for BatchDownloader<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchDownloader")
            .field("config", &self.config)
            .finish()
    }
}

impl<F, S> BatchDownloader<F, S>
where
    F: ImageFetcher,
    S: ImageSink,
{
    pub(crate) fn new(config: DownloaderConfig, fetcher: F, sink: S) -> Self {
        Self {
            config,
            fetcher,
            sink,
        }
    }

    /// Gets the directory where files will be saved.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the pause between two images.
    pub fn pacing(&self) -> Duration {
        self.config.pacing
    }

    /// Gets the file name prefix.
    pub fn filename_prefix(&self) -> &str {
        &self.config.filename_prefix
    }

    /// Gets the fetch strategy.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Gets the save strategy.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Downloads `urls` in order and returns one [`Summary`] per URL, in the
    /// same order.
    pub async fn download(&self, owner: &str, urls: &[Url]) -> Vec<Summary> {
        info!(owner, count = urls.len(), "Starting batch download");
        let progress = ProgressDisplay::new(self.config.style_options.clone(), urls.len());
        let mut summaries = Vec::with_capacity(urls.len());

        for (position, url) in urls.iter().enumerate() {
            let filename = item_filename(
                &self.config.filename_prefix,
                owner,
                Utc::now().timestamp_millis(),
                position + 1,
            );
            progress.set_current(&filename);

            let result = self.fetch(url, &filename).await;
            let summary = Summary::new(position, url.clone(), filename);
            let summary = match result {
                Ok(size) => summary.success(size),
                Err(e) => {
                    warn!(%url, error = %e, "Download failed for image");
                    summary.fail(e)
                }
            };

            if let Some(ref callback) = self.config.on_complete {
                callback(&summary);
            }
            progress.increment();
            summaries.push(summary);

            if position + 1 < urls.len() && !self.config.pacing.is_zero() {
                debug!(pacing = ?self.config.pacing, "Pausing before next image");
                tokio::time::sleep(self.config.pacing).await;
            }
        }

        progress.finish();
        let saved = summaries.iter().filter(|s| s.is_success()).count();
        info!(owner, saved, failed = summaries.len() - saved, "Batch download finished");

        summaries
    }

    /// Fetches one image and saves it. The bytes are dropped once written.
    async fn fetch(&self, url: &Url, filename: &str) -> Result<u64, ItemDownloadError> {
        let bytes = self.fetcher.fetch(url).await?;
        let size = bytes.len() as u64;
        self.sink.save(filename, bytes).await?;
        Ok(size)
    }
}
