//! postrip resolves a social-media post into its images through a backend
//! service, lets the caller pick some of them, and downloads the picks one at
//! a time.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use postrip::{BackendClient, BackendConfig, BatchDownloaderBuilder, PostReference, SubmitOutcome, Workflow};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), postrip::Error> {
//! let backend = BackendClient::new(BackendConfig::default())?;
//! let downloader = BatchDownloaderBuilder::new()
//!     .directory("output".into())
//!     .build(backend.client().clone());
//! let workflow = Workflow::new(backend, downloader);
//!
//! match workflow.submit(&PostReference::new("https://www.instagram.com/p/abc/")).await {
//!     SubmitOutcome::Ready { .. } => {
//!         workflow.confirm_download().await;
//!     }
//!     SubmitOutcome::Failed(message) => eprintln!("Error: {}", message),
//!     SubmitOutcome::Ignored => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`post`] - Submitted references, resolved posts and the image selection
//! - [`backend`] - Transport to the resolver service and its image proxy
//! - [`downloader`] - The sequential batch download loop
//! - [`workflow`] - The state machine tying submission, selection and download together
//! - [`config`] - Settings loaded at startup
//! - [`error`] - Centralized error handling
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display

pub mod backend;
pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod post;
pub mod progress;
pub mod workflow;

pub use backend::{Backend, BackendClient, BackendConfig};
pub use config::Settings;
pub use downloader::{item_filename, BatchDownloader, BatchDownloaderBuilder, Status, Summary};
pub use error::{BackendError, Error, ItemDownloadError, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use post::{PostReference, ResolvedPost, SelectionSet};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use workflow::{HttpWorkflow, Phase, Session, SubmitOutcome, Workflow};
