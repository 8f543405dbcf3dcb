//! Pantera-Site - client-side enhancements for the La Pantera Rosa website
//!
//! Two independent features run against the rendered page:
//!
//! - [`navigation`]: active navigation entry, smooth in-page scrolling with
//!   focus transfer, page-load announcement, gallery keyboard navigation and
//!   global keyboard shortcuts
//! - [`media`]: lazily embedded video player behind an activation control
//!
//! Both reach the page only through the [`pantera_dom::Document`] capability,
//! so they run unchanged against a browser (`WebDocument`, wasm32) or the
//! headless [`pantera_dom::MemoryDocument`].
//!
//! # Examples
//!
//! ```
//! use pantera_dom::{Document, MemoryDocument};
//! use pantera_site::{config::SiteConfig, site};
//! use std::rc::Rc;
//!
//! let doc = Rc::new(MemoryDocument::new("/gallery.html"));
//! let nav = doc.element(doc.body().unwrap(), "nav", &[]);
//! let link = doc.element(nav, "a", &[("class", "nav-link"), ("href", "gallery.html")]);
//!
//! let site = site::install(Rc::clone(&doc), &SiteConfig::default());
//! assert!(doc.has_class(link, "active"));
//! site.teardown();
//! ```

pub mod a11y;
pub mod config;
pub mod logging;
pub mod media;
pub mod navigation;
pub mod site;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::SiteConfig;
pub use media::{MediaElements, MediaLoader};
pub use navigation::Synchronizer;
pub use site::{install, Site};
