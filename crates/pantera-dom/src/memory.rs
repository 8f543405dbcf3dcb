//! Headless in-memory document.
//!
//! [`MemoryDocument`] keeps an arena of elements rooted at
//! `html > head, body`. Timers run against a virtual clock that only moves
//! when [`MemoryDocument::advance`] is called, and every side effect a browser
//! would make visible (history pushes, navigations, scroll requests) is
//! recorded for inspection.

use crate::document::Document;
use crate::error::{DomError, Result};
use crate::event::{DomEvent, EventKind, ListenTarget, Listener, ListenerId, Outcome};
use crate::node::{NodeId, Selector};
use crate::scroll::ScrollOptions;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Elements that accept focus without a `tabindex`.
const NATIVELY_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea", "iframe"];

#[derive(Debug)]
struct NodeData {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attr("id") == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            Selector::AttrPrefix { tag, attr, prefix } => {
                self.tag.eq_ignore_ascii_case(tag)
                    && self
                        .attr(attr)
                        .map(|v| v.starts_with(prefix.as_str()))
                        .unwrap_or(false)
            }
        }
    }
}

struct Timer {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

struct Registration {
    id: ListenerId,
    target: ListenTarget,
    kind: EventKind,
    listener: Listener,
}

/// A complete [`Document`] that lives entirely in memory.
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    path: RefCell<String>,
    hash: RefCell<String>,
    focused: Cell<Option<NodeId>>,
    history: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    scrolls: RefCell<Vec<(NodeId, ScrollOptions)>>,
    clock: Cell<Duration>,
    timers: RefCell<Vec<Timer>>,
    timer_seq: Cell<u64>,
    listeners: RefCell<Vec<Registration>>,
    listener_seq: Cell<u64>,
}

impl MemoryDocument {
    /// Create an empty `html > head, body` document located at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        let nodes = vec![NodeData::new("html"), NodeData::new("head"), NodeData::new("body")];
        let doc = Self {
            nodes: RefCell::new(nodes),
            root: NodeId(0),
            head: NodeId(1),
            body: NodeId(2),
            path: RefCell::new(path.into()),
            hash: RefCell::new(String::new()),
            focused: Cell::new(None),
            history: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
            clock: Cell::new(Duration::ZERO),
            timers: RefCell::new(Vec::new()),
            timer_seq: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            listener_seq: Cell::new(0),
        };
        {
            let mut nodes = doc.nodes.borrow_mut();
            nodes[0].children = vec![doc.head, doc.body];
            nodes[1].parent = Some(doc.root);
            nodes[2].parent = Some(doc.root);
        }
        doc
    }

    /// Create an element under `parent` with the given attributes.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this document.
    pub fn element(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.push_node(tag);
        {
            let mut nodes = self.nodes.borrow_mut();
            for (name, value) in attrs {
                nodes[id.0].set_attr(name, value);
            }
        }
        self.append_child(parent, id)
            .unwrap_or_else(|e| panic!("cannot build element under {parent:?}: {e}"));
        id
    }

    /// Like [`element`](Self::element), with text content.
    pub fn text_element(
        &self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> NodeId {
        let id = self.element(parent, tag, attrs);
        self.nodes.borrow_mut()[id.0].text = text.to_string();
        id
    }

    pub fn set_location(&self, path: impl Into<String>) {
        *self.path.borrow_mut() = path.into();
        self.hash.borrow_mut().clear();
    }

    /// Fragment of the visible address, including the leading `#`.
    pub fn location_hash(&self) -> String {
        self.hash.borrow().clone()
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.nodes.borrow().get(node.0).map(|n| n.tag.clone())
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Whether `node` is reachable from the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    /// Fragments pushed to the session history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Addresses passed to [`Document::navigate`], oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    /// Scroll requests, oldest first.
    pub fn scrolls(&self) -> Vec<(NodeId, ScrollOptions)> {
        self.scrolls.borrow().clone()
    }

    pub fn now(&self) -> Duration {
        self.clock.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Move the virtual clock forward, running every timer that falls due in
    /// order of due time, then scheduling order.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.get() + by;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let position = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                position.map(|i| timers.remove(i))
            };
            let Some(timer) = next else { break };
            self.clock.set(timer.due);
            (timer.task)();
        }
        self.clock.set(target);
    }

    /// Deliver `event` to `target`, bubbling through ancestors to the
    /// document as a browser would. Returns whether any listener asked to
    /// prevent the default action.
    pub fn dispatch(&self, target: ListenTarget, event: &DomEvent) -> Outcome {
        let mut path = Vec::new();
        if let ListenTarget::Node(node) = target {
            let nodes = self.nodes.borrow();
            let mut current = Some(node);
            while let Some(id) = current {
                path.push(ListenTarget::Node(id));
                current = nodes.get(id.0).and_then(|n| n.parent);
            }
        }
        if matches!(target, ListenTarget::Document) || self.is_attached_target(target) {
            path.push(ListenTarget::Document);
        }

        let kind = event.kind();
        let mut outcome = Outcome::Proceed;
        for hop in path {
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .filter(|r| r.target == hop && r.kind == kind)
                .map(|r| r.listener.clone())
                .collect();
            for listener in listeners {
                outcome = outcome.merge(listener(event));
            }
        }
        outcome
    }

    fn is_attached_target(&self, target: ListenTarget) -> bool {
        match target {
            ListenTarget::Document => true,
            ListenTarget::Node(node) => self.is_attached(node),
        }
    }

    fn push_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData::new(tag));
        NodeId(nodes.len() - 1)
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node.0 < self.nodes.borrow().len() {
            Ok(())
        } else {
            Err(DomError::UnknownNode(node))
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&self, node: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node.0].parent.take() {
            nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    fn drop_focus_within(&self, node: NodeId) {
        if let Some(focused) = self.focused.get() {
            if self.is_ancestor_or_self(node, focused) {
                self.focused.set(None);
            }
        }
    }

    fn drop_focus_within_children(&self, node: NodeId) {
        if let Some(focused) = self.focused.get() {
            if focused != node && self.is_ancestor_or_self(node, focused) {
                self.focused.set(None);
            }
        }
    }

    /// Pre-order walk of the descendants of `scope`, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let children = {
            let nodes = self.nodes.borrow();
            out.push_str(&nodes[node.0].text);
            nodes[node.0].children.clone()
        };
        for child in children {
            self.collect_text(child, out);
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Document for MemoryDocument {
    fn location_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let matched: Vec<NodeId> = {
            let candidates = self.descendants(self.root);
            let nodes = self.nodes.borrow();
            candidates
                .into_iter()
                .filter(|id| nodes[id.0].matches(selector))
                .collect()
        };
        matched
    }

    fn query_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.check(scope).ok()?;
        let candidates = self.descendants(scope);
        let nodes = self.nodes.borrow();
        candidates.into_iter().find(|id| nodes[id.0].matches(selector))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_first(&Selector::id(id))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn head(&self) -> Option<NodeId> {
        Some(self.head)
    }

    fn active_element(&self) -> Option<NodeId> {
        Some(self.focused.get().unwrap_or(self.body))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(node.0)
            .and_then(|n| n.attr(name).map(str::to_string))
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.check(node)?;
        self.nodes.borrow_mut()[node.0].set_attr(name, value);
        Ok(())
    }

    fn remove_attribute(&self, node: NodeId, name: &str) -> Result<()> {
        self.check(node)?;
        self.nodes.borrow_mut()[node.0].attrs.retain(|(k, _)| k != name);
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(node.0)
            .map(|n| n.has_class(class))
            .unwrap_or(false)
    }

    fn add_class(&self, node: NodeId, class: &str) -> Result<()> {
        self.check(node)?;
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.0];
        if data.has_class(class) {
            return Ok(());
        }
        let updated = match data.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        data.set_attr("class", &updated);
        Ok(())
    }

    fn remove_class(&self, node: NodeId, class: &str) -> Result<()> {
        self.check(node)?;
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.0];
        if let Some(existing) = data.attr("class") {
            let updated = existing
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
            data.set_attr("class", &updated);
        }
        Ok(())
    }

    fn text_content(&self, node: NodeId) -> String {
        if self.check(node).is_err() {
            return String::new();
        }
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn set_text_content(&self, node: NodeId, text: &str) -> Result<()> {
        self.clear_children(node)?;
        self.nodes.borrow_mut()[node.0].text = text.to_string();
        Ok(())
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::host("createElement", format!("invalid tag name {tag:?}")));
        }
        Ok(self.push_node(tag))
    }

    fn append_child(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::host(
                "appendChild",
                "the new child is an ancestor of the parent",
            ));
        }
        self.detach(child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
        Ok(())
    }

    fn clear_children(&self, node: NodeId) -> Result<()> {
        self.check(node)?;
        self.drop_focus_within_children(node);
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
        nodes[node.0].text.clear();
        Ok(())
    }

    fn remove(&self, node: NodeId) -> Result<()> {
        self.check(node)?;
        if node == self.root {
            return Err(DomError::host("remove", "cannot remove the document element"));
        }
        self.drop_focus_within(node);
        self.detach(node);
        Ok(())
    }

    fn focus(&self, node: NodeId) -> Result<()> {
        self.check(node)?;
        if !self.is_attached(node) {
            return Ok(());
        }
        let focusable = {
            let nodes = self.nodes.borrow();
            let data = &nodes[node.0];
            data.attr("tabindex").is_some() || NATIVELY_FOCUSABLE.contains(&data.tag.as_str())
        };
        if focusable {
            self.focused.set(Some(node));
        }
        Ok(())
    }

    fn scroll_into_view(&self, node: NodeId, options: ScrollOptions) -> Result<()> {
        self.check(node)?;
        self.scrolls.borrow_mut().push((node, options));
        Ok(())
    }

    fn push_fragment(&self, fragment: &str) -> Result<()> {
        self.history.borrow_mut().push(fragment.to_string());
        *self.hash.borrow_mut() = fragment.to_string();
        Ok(())
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.navigations.borrow_mut().push(href.to_string());
        Ok(())
    }

    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()> {
        let seq = self.timer_seq.get();
        self.timer_seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            due: self.clock.get() + delay,
            seq,
            task,
        });
        Ok(())
    }

    fn listen(
        &self,
        target: ListenTarget,
        kind: EventKind,
        listener: Listener,
    ) -> Result<ListenerId> {
        if let ListenTarget::Node(node) = target {
            self.check(node)?;
        }
        let id = ListenerId(self.listener_seq.get());
        self.listener_seq.set(id.0 + 1);
        self.listeners.borrow_mut().push(Registration {
            id,
            target,
            kind,
            listener,
        });
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) -> Result<()> {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            let before = listeners.len();
            listeners.retain(|r| r.id != id);
            before != listeners.len()
        };
        if removed {
            Ok(())
        } else {
            Err(DomError::UnknownListener(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEvent;
    use crate::scroll::ScrollBlock;
    use assert_matches::assert_matches;
    use std::rc::Rc;

    #[test]
    fn test_query_in_document_order() {
        let doc = MemoryDocument::new("/index.html");
        let body = doc.body().unwrap();
        let nav = doc.element(body, "nav", &[]);
        let first = doc.element(nav, "a", &[("class", "nav-link")]);
        let main = doc.element(body, "main", &[]);
        let second = doc.element(main, "a", &[("class", "nav-link extra")]);

        assert_eq!(doc.query_all(&Selector::class("nav-link")), vec![first, second]);
        assert_eq!(doc.query_within(main, &Selector::tag("a")), Some(second));
        assert_eq!(doc.query_within(second, &Selector::tag("a")), None);
    }

    #[test]
    fn test_detached_nodes_are_not_queried() {
        let doc = MemoryDocument::default();
        let orphan = doc.create_element("div").unwrap();
        doc.set_attribute(orphan, "id", "orphan").unwrap();
        assert_eq!(doc.element_by_id("orphan"), None);

        doc.append_child(doc.body().unwrap(), orphan).unwrap();
        assert_eq!(doc.element_by_id("orphan"), Some(orphan));

        doc.remove(orphan).unwrap();
        assert_eq!(doc.element_by_id("orphan"), None);
        assert!(!doc.is_attached(orphan));
    }

    #[test]
    fn test_attr_prefix_selector() {
        let doc = MemoryDocument::default();
        let body = doc.body().unwrap();
        let anchor = doc.element(body, "a", &[("href", "#intro")]);
        doc.element(body, "a", &[("href", "gallery.html")]);
        doc.element(body, "div", &[("href", "#not-a-link")]);

        assert_eq!(
            doc.query_all(&Selector::attr_prefix("a", "href", "#")),
            vec![anchor]
        );
    }

    #[test]
    fn test_class_manipulation() {
        let doc = MemoryDocument::default();
        let el = doc.element(doc.body().unwrap(), "div", &[("class", "tv hidden")]);

        doc.remove_class(el, "hidden").unwrap();
        assert!(!doc.has_class(el, "hidden"));
        assert!(doc.has_class(el, "tv"));

        doc.add_class(el, "active").unwrap();
        doc.add_class(el, "active").unwrap();
        assert_eq!(doc.attribute(el, "class").as_deref(), Some("tv active"));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let doc = MemoryDocument::default();
        let body = doc.body().unwrap();
        let figure = doc.text_element(body, "figure", &[], "A ");
        doc.text_element(figure, "span", &[], "pink panther");
        assert_eq!(doc.text_content(figure), "A pink panther");

        doc.set_text_content(figure, "replaced").unwrap();
        assert_eq!(doc.text_content(figure), "replaced");
        assert!(doc.children(figure).is_empty());
    }

    #[test]
    fn test_append_rejects_cycles() {
        let doc = MemoryDocument::default();
        let outer = doc.element(doc.body().unwrap(), "div", &[]);
        let inner = doc.element(outer, "div", &[]);
        assert_matches!(
            doc.append_child(inner, outer),
            Err(DomError::Host { op: "appendChild", .. })
        );
        assert_matches!(
            doc.append_child(outer, NodeId(999)),
            Err(DomError::UnknownNode(NodeId(999)))
        );
    }

    #[test]
    fn test_focus_requires_focusability() {
        let doc = MemoryDocument::default();
        let body = doc.body().unwrap();
        let plain = doc.element(body, "div", &[]);
        let tabbable = doc.element(body, "div", &[("tabindex", "0")]);
        let button = doc.element(body, "button", &[]);

        doc.focus(plain).unwrap();
        assert_eq!(doc.active_element(), Some(body));

        doc.focus(tabbable).unwrap();
        assert_eq!(doc.active_element(), Some(tabbable));

        doc.focus(button).unwrap();
        assert_eq!(doc.active_element(), Some(button));

        doc.remove(button).unwrap();
        assert_eq!(doc.active_element(), Some(body));
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let doc = MemoryDocument::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("late", 300u64), ("early", 100), ("same", 100)] {
            let log = log.clone();
            doc.set_timeout(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(name)),
            )
            .unwrap();
        }

        doc.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());

        doc.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early", "same"]);
        assert_eq!(doc.pending_timers(), 1);

        doc.advance(Duration::from_secs(1));
        assert_eq!(*log.borrow(), vec!["early", "same", "late"]);
        assert_eq!(doc.now(), Duration::from_millis(1100));
    }

    #[test]
    fn test_dispatch_bubbles_to_document() {
        let doc = MemoryDocument::default();
        let item = doc.element(doc.body().unwrap(), "div", &[("tabindex", "0")]);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let node_seen = seen.clone();
        doc.listen(
            ListenTarget::Node(item),
            EventKind::KeyDown,
            Rc::new(move |_: &DomEvent| {
                node_seen.borrow_mut().push("node");
                Outcome::PreventDefault
            }),
        )
        .unwrap();
        let doc_seen = seen.clone();
        let doc_listener = doc
            .listen(
                ListenTarget::Document,
                EventKind::KeyDown,
                Rc::new(move |_: &DomEvent| {
                    doc_seen.borrow_mut().push("document");
                    Outcome::Proceed
                }),
            )
            .unwrap();

        let outcome = doc.dispatch(
            ListenTarget::Node(item),
            &DomEvent::KeyDown(KeyEvent::new("End")),
        );
        assert_eq!(outcome, Outcome::PreventDefault);
        assert_eq!(*seen.borrow(), vec!["node", "document"]);

        assert_eq!(doc.dispatch(ListenTarget::Node(item), &DomEvent::Click), Outcome::Proceed);

        doc.unlisten(doc_listener).unwrap();
        assert_matches!(doc.unlisten(doc_listener), Err(DomError::UnknownListener(_)));
        assert_eq!(doc.listener_count(), 1);
    }

    #[test]
    fn test_recorded_side_effects() {
        let doc = MemoryDocument::new("/episodes.html");
        let el = doc.element(doc.body().unwrap(), "section", &[]);
        doc.scroll_into_view(el, ScrollOptions::smooth(ScrollBlock::Center))
            .unwrap();
        doc.push_fragment("#top").unwrap();
        doc.navigate("index.html").unwrap();

        assert_eq!(doc.scrolls(), vec![(el, ScrollOptions::smooth(ScrollBlock::Center))]);
        assert_eq!(doc.history(), vec!["#top".to_string()]);
        assert_eq!(doc.location_hash(), "#top");
        assert_eq!(doc.navigations(), vec!["index.html".to_string()]);
        assert_eq!(doc.location_path(), "/episodes.html");
    }
}
