//! Error handling for postrip.
//!
//! Two families of errors exist. [`BackendError`] covers everything that can
//! go wrong while asking the backend to resolve a post; it always collapses to
//! a single user-facing message. [`ItemDownloadError`] covers a single image
//! failing to download and never escapes the batch loop. [`Error`] is the
//! crate-level error used by constructors and configuration loading.

use reqwest::StatusCode;
use std::fmt;
use std::io;
use thiserror::Error;

/// Message shown when the backend answered with an error but gave no detail.
pub const SERVER_FALLBACK_MESSAGE: &str = "Failed to download post";
/// Message shown when the request never got an answer.
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Is the backend running?";
/// Message shown when the request could not even be built.
pub const SETUP_FAILURE_MESSAGE: &str = "Error setting up request";

/// Errors that can happen when using postrip.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend could not resolve a post.
    #[error("{0}")]
    Backend(#[from] BackendError),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for operations that can fail with a postrip error.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed call to the resolve endpoint.
///
/// Whatever the cause, [`BackendError::message`] yields the one string shown
/// to the user. A detail reported by the server always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The server answered, but not with a usable post.
    Server {
        status: Option<StatusCode>,
        detail: Option<String>,
    },
    /// The request was sent but no answer came back.
    NoResponse(String),
    /// The request could not be built.
    Setup(String),
}

impl BackendError {
    /// Builds a [`BackendError::Server`] from an error response body.
    ///
    /// The body is expected to look like `{"detail": ...}`. A string detail is
    /// used verbatim, any other non-null JSON value is rendered as JSON.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .and_then(|detail| match detail {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) if s.is_empty() => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            });

        BackendError::Server {
            status: Some(status),
            detail,
        }
    }

    /// The message displayed next to the input field.
    pub fn message(&self) -> String {
        match self {
            BackendError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BackendError::Server { detail: None, .. } => SERVER_FALLBACK_MESSAGE.to_string(),
            BackendError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_string(),
            BackendError::Setup(_) => SETUP_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            BackendError::Setup(err.to_string())
        } else if err.is_status() {
            BackendError::Server {
                status: err.status(),
                detail: None,
            }
        } else if err.is_decode() || err.is_body() {
            BackendError::Server {
                status: None,
                detail: None,
            }
        } else {
            BackendError::NoResponse(err.to_string())
        }
    }
}

impl From<reqwest_middleware::Error> for BackendError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(err) => err.into(),
            reqwest_middleware::Error::Middleware(err) => BackendError::NoResponse(err.to_string()),
        }
    }
}

/// A single image that could not be fetched or saved.
#[derive(Error, Debug)]
pub enum ItemDownloadError {
    /// The request for the image bytes failed.
    #[error("request failed: {0}")]
    Fetch(String),

    /// The image endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The bytes could not be written out.
    #[error("failed to save {filename}")]
    Save {
        filename: String,
        #[source]
        source: io::Error,
    },
}

impl From<reqwest_middleware::Error> for ItemDownloadError {
    fn from(err: reqwest_middleware::Error) -> Self {
        ItemDownloadError::Fetch(err.to_string())
    }
}

impl From<reqwest::Error> for ItemDownloadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if err.is_status() => ItemDownloadError::Status(status),
            _ => ItemDownloadError::Fetch(err.to_string()),
        }
    }
}
