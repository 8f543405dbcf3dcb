//! Shared test harness for integration tests.
//!
//! Provides [`SamplePage`], an in-memory rendering of a typical site page:
//! navigation, in-page sections, a gallery and the video player markup.

#![allow(dead_code)]

use pantera_dom::{Document, DomEvent, KeyEvent, ListenTarget, MemoryDocument, NodeId, Outcome};
use std::rc::Rc;

pub const PANTHER_URL: &str = "https://youtu.be/6ZSIwUwbITM";
pub const PANTHER_ID: &str = "6ZSIwUwbITM";

/// Handles to the interesting nodes of a sample page.
pub struct SamplePage {
    pub doc: Rc<MemoryDocument>,
    pub nav_links: Vec<NodeId>,
    pub heading: NodeId,
    pub section: NodeId,
    pub section_link: NodeId,
    pub missing_link: NodeId,
    pub top_link: NodeId,
    pub gallery: Vec<NodeId>,
    pub control: NodeId,
    pub container: NodeId,
    pub mount: NodeId,
}

impl SamplePage {
    /// Build the page at `path` with `gallery_items` complete gallery items.
    pub fn new(path: &str, gallery_items: usize) -> Self {
        let doc = Rc::new(MemoryDocument::new(path));
        let body = doc.body().unwrap();

        let nav = doc.element(body, "nav", &[("aria-label", "Principal")]);
        let nav_links = ["index.html", "gallery.html", "episodes.html"]
            .iter()
            .map(|href| doc.element(nav, "a", &[("class", "nav-link"), ("href", href)]))
            .collect();

        let main = doc.element(body, "main", &[]);
        let heading = doc.text_element(main, "h1", &[], "La Pantera Rosa");
        let section_link = doc.text_element(main, "a", &[("href", "#section1")], "Historia");
        let missing_link = doc.text_element(main, "a", &[("href", "#missing")], "Roto");
        let top_link = doc.text_element(main, "a", &[("href", "#")], "Arriba");
        let section = doc.element(main, "section", &[("id", "section1")]);

        let grid = doc.element(main, "div", &[("class", "gallery-grid")]);
        let gallery = (0..gallery_items)
            .map(|i| {
                let item = doc.element(grid, "figure", &[("class", "gallery-item")]);
                doc.element(item, "img", &[("class", "gallery-image"), ("src", "p.jpg")]);
                doc.text_element(
                    item,
                    "figcaption",
                    &[("class", "image-caption")],
                    &format!("Imagen {i}"),
                );
                item
            })
            .collect();

        let control = doc.text_element(main, "button", &[("id", "btn-cassette")], "Play");
        let container = doc.element(main, "div", &[("id", "tv-container"), ("class", "tv hidden")]);
        let mount = doc.element(container, "div", &[("id", "video-player")]);

        Self {
            doc,
            nav_links,
            heading,
            section,
            section_link,
            missing_link,
            top_link,
            gallery,
            control,
            container,
            mount,
        }
    }

    pub fn click(&self, node: NodeId) -> Outcome {
        self.doc.dispatch(ListenTarget::Node(node), &DomEvent::Click)
    }

    pub fn key_on(&self, node: NodeId, event: KeyEvent) -> Outcome {
        self.doc.dispatch(ListenTarget::Node(node), &DomEvent::KeyDown(event))
    }

    pub fn key(&self, event: KeyEvent) -> Outcome {
        self.doc.dispatch(ListenTarget::Document, &DomEvent::KeyDown(event))
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.doc.active_element()
    }

    pub fn active_links(&self) -> Vec<NodeId> {
        self.nav_links
            .iter()
            .copied()
            .filter(|&l| self.doc.has_class(l, "active"))
            .collect()
    }

    pub fn iframes(&self) -> Vec<NodeId> {
        self.doc
            .children(self.mount)
            .into_iter()
            .filter(|&n| self.doc.tag(n).as_deref() == Some("iframe"))
            .collect()
    }

    /// Live regions currently attached to the body.
    pub fn live_regions(&self) -> Vec<NodeId> {
        let body = self.doc.body().unwrap();
        self.doc
            .children(body)
            .into_iter()
            .filter(|&n| self.doc.attribute(n, "role").as_deref() == Some("status"))
            .collect()
    }
}
