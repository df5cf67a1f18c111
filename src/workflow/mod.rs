//! Workflow module tying submission, selection and download together.
//!
//! A [`Workflow`] moves through explicit [`Phase`]s:
//!
//! ```text
//! Idle -> Submitting -> ResultReady -> Downloading -> Idle
//!                    \-> SubmitFailed
//! ```
//!
//! While `Submitting` or `Downloading`, further submissions are ignored. The
//! [`Session`] held in `ResultReady` owns the resolved post and the
//! selection; it is created by a successful submission and torn down by a
//! cancel or a finished download.
//!
//! # Examples
//!
//! ```rust,no_run
//! use postrip::backend::{BackendClient, BackendConfig};
//! use postrip::downloader::BatchDownloaderBuilder;
//! use postrip::post::PostReference;
//! use postrip::workflow::{SubmitOutcome, Workflow};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = BackendClient::new(BackendConfig::default())?;
//! let downloader = BatchDownloaderBuilder::new().build(backend.client().clone());
//! let workflow = Workflow::new(backend, downloader);
//!
//! let reference = PostReference::new("https://www.instagram.com/p/abc/");
//! if let SubmitOutcome::Ready { images, .. } = workflow.submit(&reference).await {
//!     println!("{} images found", images);
//!     workflow.toggle(0);
//!     let summaries = workflow.confirm_download().await.unwrap_or_default();
//!     println!("{} processed", summaries.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod phase;
pub mod workflow;

pub use phase::{Phase, Session, SubmitOutcome};
pub use workflow::{HttpWorkflow, Workflow};
