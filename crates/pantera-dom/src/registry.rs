//! Handle table for host elements.
//!
//! Handles are never reused, so a stale [`NodeId`] stays unknown after its
//! element is released instead of aliasing a newer one.

use crate::node::NodeId;
use std::collections::HashMap;

/// Attribute carrying an element's handle key on the host side.
pub(crate) const KEY_ATTR: &str = "data-pantera-node";

#[derive(Debug)]
pub(crate) struct Registry<E> {
    entries: HashMap<usize, E>,
    next: usize,
}

impl<E: PartialEq + Clone> Registry<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next: 0,
        }
    }

    /// Handle for `element` if `key` (read back from the element) still
    /// refers to it.
    pub(crate) fn find(&self, key: Option<&str>, element: &E) -> Option<NodeId> {
        let key: usize = key?.parse().ok()?;
        match self.entries.get(&key) {
            Some(known) if known == element => Some(NodeId(key)),
            _ => None,
        }
    }

    /// Store `element` under a fresh handle.
    pub(crate) fn insert(&mut self, element: E) -> NodeId {
        let key = self.next;
        self.next += 1;
        self.entries.insert(key, element);
        NodeId(key)
    }

    pub(crate) fn get(&self, node: NodeId) -> Option<E> {
        self.entries.get(&node.0).cloned()
    }

    /// Forget the element behind `key`, returning it if it was registered.
    pub(crate) fn release_key(&mut self, key: &str) -> Option<E> {
        let key: usize = key.parse().ok()?;
        self.entries.remove(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
