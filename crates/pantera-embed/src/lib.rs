//! # pantera-embed
//!
//! Resolve a configured video address to a platform identifier and describe
//! the embeddable player frame for it.
//!
//! ## Quick Start
//!
//! ```
//! use pantera_embed::{extract_identifier, EmbedFrame};
//!
//! let id = extract_identifier("https://youtu.be/6ZSIwUwbITM").unwrap();
//! assert_eq!(id.as_str(), "6ZSIwUwbITM");
//!
//! let frame = EmbedFrame::builder(&id).title("La Pantera Rosa").build();
//! assert_eq!(
//!     frame.src,
//!     "https://www.youtube.com/embed/6ZSIwUwbITM?autoplay=1&rel=0&modestbranding=1"
//! );
//! ```
//!
//! ## Matching Order
//!
//! Addresses are tested against an ordered list of independent matchers and
//! the first match wins:
//!
//! 1. [`UrlShapeMatcher`]: watch URLs, short links and embed URLs
//! 2. [`BareIdMatcher`]: a raw 11-character identifier
//!
//! Host names are matched by shape only; `youtu.be/<id>` embedded in any
//! other address is accepted.

pub mod frame;
pub mod matcher;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use frame::{EmbedFrame, EmbedFrameBuilder, EmbedParams, DEFAULT_EMBED_HOST, FRAME_PERMISSIONS};
pub use matcher::{BareIdMatcher, Extractor, IdentifierMatcher, UrlShapeMatcher, VideoId};

/// Extract a video identifier using the default matcher order.
///
/// # Examples
///
/// ```
/// use pantera_embed::extract_identifier;
///
/// assert!(extract_identifier("https://www.youtube.com/watch?v=6ZSIwUwbITM").is_some());
/// assert!(extract_identifier("not a url").is_none());
/// ```
pub fn extract_identifier(address: &str) -> Option<VideoId> {
    Extractor::default().extract(address)
}
