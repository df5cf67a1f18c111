//! Downloader module containing the sequential batch download loop.
//!
//! The loop fetches each selected image in order, names it after the post
//! owner, saves it, and waits a fixed interval before the next one. A failed
//! image is reported in its [`Summary`] and never stops the batch.
//!
//! # Overview
//!
//! - `downloader` - [`BatchDownloader`] and the loop itself
//! - `builder` - [`BatchDownloaderBuilder`] for configuring a downloader
//! - `config` - [`DownloaderConfig`] and the completion callback type
//! - `fetch` - the [`ImageFetcher`] and [`ImageSink`] seams and their HTTP and directory implementations
//! - `summary` - per-image [`Summary`] and [`Status`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use postrip::downloader::BatchDownloaderBuilder;
//! use postrip::http::{create_http_client, HttpClientConfig};
//! use reqwest::Url;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let downloader = BatchDownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build(client);
//!
//! let urls = vec![Url::parse("http://localhost:8000/api/proxy-image?url=a")?];
//! let summaries = downloader.download("jdoe", &urls).await;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod fetch;
pub mod summary;

pub use builder::BatchDownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig};
pub use downloader::{item_filename, BatchDownloader};
pub use fetch::{DirectorySink, HttpFetcher, ImageFetcher, ImageSink};
pub use summary::{Status, Summary};
