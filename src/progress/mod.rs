//! Progress module containing progress bar functionality.
//!
//! A batch download shows one bar that advances once per image, whether the
//! image succeeded or not.
//!
//! # Examples
//!
//! ```rust
//! use postrip::progress::{ProgressBarOpts, StyleOptions};
//!
//! let style_options = StyleOptions::new(ProgressBarOpts::new(
//!     Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.to_string()),
//!     Some(ProgressBarOpts::CHARS_LINE.to_string()),
//!     true,
//!     false,
//! ));
//!
//! // Or no bar at all.
//! let hidden = StyleOptions::hidden();
//! assert!(!hidden.is_enabled());
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
