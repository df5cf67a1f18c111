//! Submitted references and resolved posts.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A user-supplied URL identifying a remote post.
///
/// Nothing is validated here beyond emptiness; parsing the URL is the
/// backend's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostReference(String);

impl PostReference {
    /// Creates a new [`PostReference`].
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `true` if there is nothing to submit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PostReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostReference {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PostReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn unknown_owner() -> String {
    "unknown".to_string()
}

fn owner_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_owner))
}

/// A post resolved by the backend.
///
/// Only `owner` and `images` drive the download; the remaining fields are
/// informational and default when the backend leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPost {
    /// Username of the post's author.
    #[serde(default = "unknown_owner", deserialize_with = "owner_or_unknown")]
    pub owner: String,
    /// Image source URLs, in post order.
    pub images: Vec<String>,
    /// Post caption.
    #[serde(default)]
    pub caption: Option<String>,
    /// Like count, when known.
    #[serde(default)]
    pub likes: Option<u64>,
    /// Whether the post itself is a video.
    #[serde(default)]
    pub is_video: bool,
    /// Video URL for video posts.
    #[serde(default)]
    pub video_url: Option<String>,
}

impl ResolvedPost {
    /// Creates a [`ResolvedPost`] with only an owner and images.
    pub fn new(owner: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            owner: owner.into(),
            images,
            caption: None,
            likes: None,
            is_video: false,
            video_url: None,
        }
    }

    /// Number of images in the post.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Return `true` if the post has no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
