//! Per-image download outcome.

use reqwest::Url;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download completed successfully
    Success,
}

/// Represents the outcome of one image in a batch.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Zero-based position in the batch.
    position: usize,
    /// URL the bytes were fetched from.
    url: Url,
    /// File name the bytes were saved under.
    filename: String,
    /// Saved size in bytes.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(position: usize, url: Url, filename: impl Into<String>) -> Self {
        Self {
            position,
            url,
            filename: filename.into(),
            size: 0,
            status: Status::NotStarted,
        }
    }

    /// Mark the summary as saved with `size` bytes.
    pub fn success(self, size: u64) -> Self {
        Self {
            size,
            status: Status::Success,
            ..self
        }
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Zero-based position in the batch.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get a reference to the fetched URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the saved file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Return `true` if the image was saved.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
