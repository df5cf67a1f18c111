//! Backend module containing the transport to the resolver service.
//!
//! The backend exposes two endpoints: `POST {base}/api/download` resolves a
//! post into an owner and image URLs, and `GET {base}/api/proxy-image?url=...`
//! serves image bytes from the client's own origin.
//!
//! # Examples
//!
//! ```rust,no_run
//! use postrip::backend::{BackendClient, BackendConfig};
//! use postrip::post::PostReference;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = BackendClient::new(BackendConfig::default())?;
//! let post = backend
//!     .submit_post(&PostReference::new("https://www.instagram.com/p/abc/"))
//!     .await?;
//! for image in &post.images {
//!     println!("{}", backend.proxy_url(image));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{BackendClient, BackendConfig, DEFAULT_API_URL};

use crate::error::BackendError;
use crate::post::{PostReference, ResolvedPost};

use async_trait::async_trait;
use reqwest::Url;

/// The operations the workflow needs from the resolver service.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Resolves a post into its owner and image URLs. Attempted once.
    async fn submit_post(&self, reference: &PostReference) -> Result<ResolvedPost, BackendError>;

    /// URL serving the bytes of `image` through the backend.
    fn proxy_url(&self, image: &str) -> Url;
}
