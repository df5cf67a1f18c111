//! HTTP implementation of [`Backend`].

use super::Backend;
use crate::error::{BackendError, Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::post::{PostReference, ResolvedPost};

use async_trait::async_trait;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the backend transport.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, without the `/api` suffix.
    pub api_url: String,
    /// HTTP client settings.
    pub http: HttpClientConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

#[derive(Serialize)]
struct ResolveRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct RootMessage {
    message: String,
}

/// Client for the resolver backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base: Url,
    client: ClientWithMiddleware,
}

impl BackendClient {
    /// Creates a client with its own HTTP stack.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = create_http_client(config.http)?;
        Self::with_client(&config.api_url, client)
    }

    /// Creates a client sharing an existing HTTP stack.
    pub fn with_client(api_url: &str, client: ClientWithMiddleware) -> Result<Self> {
        let base = Url::parse(api_url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", api_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" cannot be used as a base",
                api_url
            )));
        }
        Ok(Self { base, client })
    }

    /// Get the backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Get the underlying HTTP client.
    pub fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Resolves `reference` through `POST {base}/api/download`.
    pub async fn submit_post(
        &self,
        reference: &PostReference,
    ) -> std::result::Result<ResolvedPost, BackendError> {
        let url = self.endpoint(&["api", "download"]);
        debug!(%url, reference = %reference, "Resolving post");

        let res = self
            .client
            .post(url)
            .json(&ResolveRequest {
                url: reference.as_str(),
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| {
            warn!(%status, error = %e, "Failed to read resolve response body");
            BackendError::Server {
                status: Some(status),
                detail: None,
            }
        })?;

        if !status.is_success() {
            return Err(BackendError::from_body(status, &body));
        }

        serde_json::from_slice::<ResolvedPost>(&body).map_err(|e| {
            warn!(%status, error = %e, "Malformed resolve response");
            BackendError::Server {
                status: Some(status),
                detail: None,
            }
        })
    }

    /// Builds `{base}/api/proxy-image?url=<image>`.
    pub fn proxy_url(&self, image: &str) -> Url {
        let mut url = self.endpoint(&["api", "proxy-image"]);
        let encoded: String = form_urlencoded::byte_serialize(image.as_bytes()).collect();
        url.set_query(Some(&format!("url={}", encoded)));
        url
    }

    /// Calls `GET {base}/` and returns the status message.
    pub async fn health(&self) -> std::result::Result<String, BackendError> {
        let res = self.client.get(self.base.clone()).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        if !status.is_success() {
            return Err(BackendError::from_body(status, &body));
        }
        serde_json::from_slice::<RootMessage>(&body)
            .map(|root| root.message)
            .map_err(|_| BackendError::Server {
                status: Some(status),
                detail: None,
            })
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn submit_post(
        &self,
        reference: &PostReference,
    ) -> std::result::Result<ResolvedPost, BackendError> {
        BackendClient::submit_post(self, reference).await
    }

    fn proxy_url(&self, image: &str) -> Url {
        BackendClient::proxy_url(self, image)
    }
}
