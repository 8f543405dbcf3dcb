//! Navigation & accessibility synchronizer.
//!
//! Marks the active navigation entry, wires smooth in-page scrolling with
//! focus transfer, announces the page load, makes the gallery keyboard
//! navigable and registers the global shortcuts. Everything registered here
//! is released again by [`Synchronizer::teardown`].

pub mod active;
pub mod anchors;
pub mod gallery;
pub mod shortcuts;

pub use active::{current_page, is_current, mark_active_link};
pub use anchors::{scroll_to_fragment, wire_anchor_links};
pub use gallery::{enhance_gallery, rove, Gallery};
pub use shortcuts::{register_shortcuts, shortcut_target};

use crate::a11y;
use crate::config::{NavigationConfig, SiteConfig};
use pantera_common::Result;
use pantera_dom::{Document, ListenerId, NodeId};
use std::rc::Rc;

/// Installed navigation and accessibility behavior for one document.
pub struct Synchronizer<D: Document + 'static> {
    doc: Rc<D>,
    listeners: Vec<ListenerId>,
    style: Option<NodeId>,
    active: Option<NodeId>,
    gallery: Vec<NodeId>,
}

impl<D: Document + 'static> Synchronizer<D> {
    /// Run every navigation and accessibility enhancement against `doc`.
    ///
    /// If any step fails, whatever was already registered is torn down
    /// before the error is returned.
    pub fn install(doc: Rc<D>, config: &SiteConfig) -> Result<Self> {
        let mut sync = Self {
            doc,
            listeners: Vec::new(),
            style: None,
            active: None,
            gallery: Vec::new(),
        };

        match sync.wire(config) {
            Ok(()) => {
                tracing::info!(
                    "Navigation enhancements installed ({} listeners, {} gallery items)",
                    sync.listeners.len(),
                    sync.gallery.len()
                );
                Ok(sync)
            }
            Err(e) => {
                sync.teardown();
                Err(e)
            }
        }
    }

    fn wire(&mut self, config: &SiteConfig) -> Result<()> {
        self.style = Some(a11y::inject_sr_only_style(&*self.doc, &config.accessibility)?);
        self.active = mark_active_link(&*self.doc, &config.navigation)?;

        let anchors = wire_anchor_links(&self.doc)?;
        self.listeners.extend(anchors);

        if let Err(e) = a11y::announce_page_load(&self.doc, &config.accessibility) {
            tracing::warn!("Page load announcement failed: {}", e);
        }

        let gallery = enhance_gallery(&self.doc, &config.gallery)?;
        self.listeners.extend(gallery.listeners);
        self.gallery = gallery.items;

        let shortcuts = register_shortcuts(&self.doc, &config.shortcuts)?;
        self.listeners.push(shortcuts);
        Ok(())
    }

    /// Re-run active-entry detection against the current location.
    pub fn refresh_active(&mut self, config: &NavigationConfig) -> Result<Option<NodeId>> {
        self.active = mark_active_link(&*self.doc, config)?;
        Ok(self.active)
    }

    /// The navigation entry marked active at install or last refresh.
    pub fn active_link(&self) -> Option<NodeId> {
        self.active
    }

    pub fn gallery_items(&self) -> &[NodeId] {
        &self.gallery
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Unregister every listener and release the injected style.
    pub fn teardown(mut self) {
        for id in self.listeners.drain(..) {
            if let Err(e) = self.doc.unlisten(id) {
                tracing::warn!("Failed to remove listener: {}", e);
            }
        }
        if let Some(style) = self.style.take() {
            if let Err(e) = a11y::release_sr_only_style(&*self.doc, style) {
                tracing::warn!("Failed to release injected style: {}", e);
            }
        }
        tracing::debug!("Navigation enhancements removed");
    }
}
