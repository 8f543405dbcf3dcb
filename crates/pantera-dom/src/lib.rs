//! Pantera-DOM: the document capability the site enhancements run against.
//!
//! Every behavior in pantera-site reads and writes the rendered page through
//! the [`Document`] trait rather than touching a browser API directly. Two
//! implementations are provided:
//!
//! - [`MemoryDocument`]: a headless element tree with a virtual clock, used by
//!   tests and anywhere no browser is available
//! - `WebDocument` (wasm32 only): the live page, via `web-sys`
//!
//! # Examples
//!
//! ```
//! use pantera_dom::{Document, MemoryDocument, Selector};
//!
//! let doc = MemoryDocument::new("/site/gallery.html");
//! let body = doc.body().unwrap();
//! let link = doc.element(body, "a", &[("class", "nav-link"), ("href", "index.html")]);
//!
//! assert_eq!(doc.query_all(&Selector::class("nav-link")), vec![link]);
//! assert_eq!(doc.attribute(link, "href").as_deref(), Some("index.html"));
//! ```

pub mod document;
pub mod error;
pub mod event;
pub mod memory;
pub mod node;
pub mod scroll;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod registry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use document::Document;
pub use error::{DomError, Result};
pub use event::{DomEvent, EventKind, KeyEvent, ListenTarget, Listener, ListenerId, Outcome};
pub use memory::MemoryDocument;
pub use node::{NodeId, Selector};
pub use scroll::{ScrollBehavior, ScrollBlock, ScrollOptions};

#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;
