//! Assistive-technology helpers shared by the navigation and media features.

mod announce;
mod style;

pub use announce::{announce, announce_page_load};
pub use style::{inject_sr_only_style, release_sr_only_style, sr_only_css};
