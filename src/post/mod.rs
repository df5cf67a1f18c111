//! Post module containing the data model of a single submission.
//!
//! - [`post`] - the submitted [`PostReference`] and the [`ResolvedPost`] the backend returns
//! - [`selection`] - the [`SelectionSet`] of images the user wants to keep
//!
//! # Examples
//!
//! ```rust
//! use postrip::post::{ResolvedPost, SelectionSet};
//!
//! let post = ResolvedPost::new("jdoe", vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
//! let mut selection = SelectionSet::all(post.images.len());
//!
//! selection.toggle(1);
//! assert_eq!(selection.selected_items(&post.images), vec!["a.jpg", "c.jpg"]);
//! ```

pub mod post;
pub mod selection;

pub use post::{PostReference, ResolvedPost};
pub use selection::SelectionSet;
