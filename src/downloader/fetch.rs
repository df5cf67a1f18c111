//! Fetch and save strategies used by the batch loop.

use crate::error::ItemDownloadError;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Retrieves the bytes of one image.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the full body behind `url`.
    async fn fetch(&self, url: &Url) -> Result<Bytes, ItemDownloadError>;
}

/// Stores the bytes of one image under a file name.
#[async_trait]
pub trait ImageSink: Send + Sync {
    /// Saves `bytes` as `filename`.
    async fn save(&self, filename: &str, bytes: Bytes) -> Result<(), ItemDownloadError>;
}

/// Fetches images with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: ClientWithMiddleware,
}

impl HttpFetcher {
    /// Creates a fetcher over `client`.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, ItemDownloadError> {
        debug!("Fetching {}", url);
        let res = self.client.get(url.clone()).send().await?;
        let res = res.error_for_status()?;
        Ok(res.bytes().await?)
    }
}

/// Saves images as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `directory`. The directory is created on
    /// first save.
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Gets the target directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl ImageSink for DirectorySink {
    async fn save(&self, filename: &str, bytes: Bytes) -> Result<(), ItemDownloadError> {
        let to_error = |source: std::io::Error| ItemDownloadError::Save {
            filename: filename.to_string(),
            source,
        };

        debug!("Creating destination directory {:?}", self.directory);
        fs::create_dir_all(&self.directory).await.map_err(to_error)?;

        let output = self.directory.join(filename);
        debug!("Writing {} bytes to {:?}", bytes.len(), output);
        fs::write(&output, &bytes).await.map_err(to_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_directory_sink_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("nested").join("out");
        let sink = DirectorySink::new(target.clone());

        sink.save("insta - jdoe -1 -1.jpg", Bytes::from_static(b"jpeg"))
            .await
            .unwrap();

        let written = std::fs::read(target.join("insta - jdoe -1 -1.jpg")).unwrap();
        assert_eq!(written, b"jpeg");
    }

    #[tokio::test]
    async fn test_directory_sink_reports_filename_on_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();
        let sink = DirectorySink::new(blocker);

        let err = sink.save("a.jpg", Bytes::new()).await.unwrap_err();
        match err {
            ItemDownloadError::Save { filename, .. } => assert_eq!(filename, "a.jpg"),
            other => panic!("Expected Save error, got {:?}", other),
        }
    }
}
