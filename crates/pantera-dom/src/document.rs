//! The document capability trait.

use crate::error::Result;
use crate::event::{EventKind, ListenTarget, Listener, ListenerId};
use crate::node::{NodeId, Selector};
use crate::scroll::ScrollOptions;
use std::time::Duration;

/// Query and mutation operations over a rendered document.
///
/// All methods take `&self`: a document is a shared, single-threaded store
/// that every handler reads and writes. Queries never fail; an unknown node
/// simply matches nothing. Mutations report host failures as
/// [`DomError`](crate::DomError).
pub trait Document {
    /// Path component of the current document address.
    fn location_path(&self) -> String;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<NodeId>;

    /// First element matching `selector`, in document order.
    fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn body(&self) -> Option<NodeId>;

    fn head(&self) -> Option<NodeId>;

    /// The element that currently has keyboard focus.
    fn active_element(&self) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, node: NodeId, name: &str) -> Result<()>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&self, node: NodeId, class: &str) -> Result<()>;

    fn remove_class(&self, node: NodeId, class: &str) -> Result<()>;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, node: NodeId) -> String;

    /// Replace the element's children with a single text run.
    fn set_text_content(&self, node: NodeId, text: &str) -> Result<()>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Result<NodeId>;

    /// Append `child` to `parent`, detaching it from any previous parent.
    fn append_child(&self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Remove every child of `node`.
    fn clear_children(&self, node: NodeId) -> Result<()>;

    /// Detach `node` from the document.
    fn remove(&self, node: NodeId) -> Result<()>;

    /// Move keyboard focus to `node`. Non-focusable elements are ignored.
    fn focus(&self, node: NodeId) -> Result<()>;

    /// Request a scroll; the animation is not awaited.
    fn scroll_into_view(&self, node: NodeId, options: ScrollOptions) -> Result<()>;

    /// Record `fragment` (e.g. `#section1`) in the session history and the
    /// visible address without navigating.
    fn push_fragment(&self, fragment: &str) -> Result<()>;

    /// Navigate the whole document to `href`.
    fn navigate(&self, href: &str) -> Result<()>;

    /// Run `task` once after at least `delay`. Timers cannot be cancelled.
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()>;

    fn listen(&self, target: ListenTarget, kind: EventKind, listener: Listener)
        -> Result<ListenerId>;

    fn unlisten(&self, id: ListenerId) -> Result<()>;
}
