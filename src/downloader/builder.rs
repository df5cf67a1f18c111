//! Builder pattern implementation for creating [`BatchDownloader`] instances.

use super::{
    config::DownloaderConfig,
    downloader::BatchDownloader,
    fetch::{DirectorySink, HttpFetcher, ImageFetcher, ImageSink},
    summary::Summary,
};
use crate::progress::StyleOptions;

use reqwest_middleware::ClientWithMiddleware;
use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`BatchDownloader`].
///
/// ```rust
/// use postrip::downloader::BatchDownloaderBuilder;
/// use postrip::http::{create_http_client, HttpClientConfig};
/// use std::time::Duration;
///
/// let client = create_http_client(HttpClientConfig::default()).unwrap();
/// let d = BatchDownloaderBuilder::hidden()
///     .pacing(Duration::from_millis(250))
///     .directory("downloads".into())
///     .build(client);
/// ```
#[derive(Default)]
pub struct BatchDownloaderBuilder {
    config: DownloaderConfig,
}

impl BatchDownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        BatchDownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = BatchDownloaderBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets the pause between two images. Zero disables pacing.
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.config.pacing = pacing;
        self
    }

    /// Sets the leading part of the saved file names.
    pub fn filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.filename_prefix = prefix.into();
        self
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each image completes, successfully or not.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postrip::downloader::{BatchDownloaderBuilder, Status};
    ///
    /// let builder = BatchDownloaderBuilder::new().on_complete(|summary| match summary.status() {
    ///     Status::Success => println!("[Saved] {}", summary.filename()),
    ///     Status::Fail(error) => println!("[Failed] {} - {}", summary.url(), error),
    ///     Status::NotStarted => {}
    /// });
    /// ```
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Get the configuration collected so far.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Create a [`BatchDownloader`] fetching over HTTP and saving to the
    /// configured directory.
    pub fn build(self, client: ClientWithMiddleware) -> BatchDownloader<HttpFetcher, DirectorySink> {
        let sink = DirectorySink::new(self.config.directory.clone());
        self.build_with(HttpFetcher::new(client), sink)
    }

    /// Create a [`BatchDownloader`] with custom fetch and save strategies.
    pub fn build_with<F, S>(self, fetcher: F, sink: S) -> BatchDownloader<F, S>
    where
        F: ImageFetcher,
        S: ImageSink,
    {
        BatchDownloader::new(self.config, fetcher, sink)
    }
}
