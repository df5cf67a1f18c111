//! HTTP module containing HTTP client functionality.
//!
//! Every outbound call made by postrip, to the resolve endpoint or to the image
//! proxy, goes through the client built here. Requests are traced through
//! `reqwest-tracing` and are attempted exactly once.
//!
//! # Examples
//!
//! ```rust
//! use postrip::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "postrip/0.1".parse()?);
//!
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
