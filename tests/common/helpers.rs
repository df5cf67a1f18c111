#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use postrip::backend::Backend;
use postrip::downloader::{ImageFetcher, ImageSink};
use postrip::{BackendClient, BackendConfig, BackendError, ItemDownloadError, PostReference, ResolvedPost};
use reqwest::{StatusCode, Url};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::time::Instant;
use wiremock::MockServer;

// Common test constants
pub const TEST_POST_URL: &str = "https://www.instagram.com/p/Cabc123/";
pub const TEST_OWNER: &str = "jdoe";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Lists the file names in a directory, sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// CDN-style image URLs for a post
pub fn create_test_images(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://cdn.example.com/img{}.jpg", i))
        .collect()
}

/// Proxy-style URLs as handed to the download loop
pub fn create_test_urls(count: usize) -> Vec<Url> {
    (1..=count)
        .map(|i| Url::parse(&format!("http://proxy.test/img{}.jpg", i)).unwrap())
        .collect()
}

/// Body returned by the resolve endpoint
pub fn resolve_body(owner: &str, images: &[String]) -> Value {
    json!({
        "images": images,
        "caption": "caption",
        "owner": owner,
        "likes": 7,
        "is_video": false,
        "video_url": null
    })
}

/// Backend client pointed at a mock server
pub fn backend_for(server: &MockServer) -> BackendClient {
    BackendClient::new(BackendConfig {
        api_url: server.uri(),
        ..BackendConfig::default()
    })
    .expect("Failed to create backend client")
}

/// Base URL of a local port nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

// === Fakes ===

/// Backend answering every submission with the same result
pub struct FakeBackend {
    result: Result<ResolvedPost, BackendError>,
    calls: AtomicUsize,
}

impl FakeBackend {
    pub fn resolving(owner: &str, images: Vec<String>) -> Self {
        Self {
            result: Ok(ResolvedPost::new(owner, images)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: BackendError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn submit_post(&self, _reference: &PostReference) -> Result<ResolvedPost, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn proxy_url(&self, image: &str) -> Url {
        let name = image.rsplit('/').next().unwrap_or(image);
        Url::parse(&format!("http://proxy.test/{}", name)).unwrap()
    }
}

/// Fetcher recording every call with its (tokio) time, failing on chosen URLs
#[derive(Clone, Default)]
pub struct RecordingFetcher {
    calls: Arc<Mutex<Vec<(Url, Instant)>>>,
    failing: Vec<Url>,
}

impl RecordingFetcher {
    pub fn failing_on(failing: Vec<Url>) -> Self {
        Self {
            failing,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(Url, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<Url> {
        self.calls().into_iter().map(|(url, _)| url).collect()
    }
}

#[async_trait]
impl ImageFetcher for RecordingFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, ItemDownloadError> {
        self.calls.lock().unwrap().push((url.clone(), Instant::now()));
        if self.failing.contains(url) {
            return Err(ItemDownloadError::Status(StatusCode::BAD_GATEWAY));
        }
        Ok(Bytes::from(url.path().to_string()))
    }
}

/// Sink keeping saved files in memory
#[derive(Clone, Default)]
pub struct MemorySink {
    saved: Arc<Mutex<Vec<(String, Bytes)>>>,
}

impl MemorySink {
    pub fn saved(&self) -> Vec<(String, Bytes)> {
        self.saved.lock().unwrap().clone()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.saved().into_iter().map(|(name, _)| name).collect()
    }
}

#[async_trait]
impl ImageSink for MemorySink {
    async fn save(&self, filename: &str, bytes: Bytes) -> Result<(), ItemDownloadError> {
        self.saved.lock().unwrap().push((filename.to_string(), bytes));
        Ok(())
    }
}
