//! Event model shared by all document implementations.

use crate::node::NodeId;
use pantera_common::Modifier;
use std::rc::Rc;

/// A keyboard event as seen by handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// DOM `KeyboardEvent.key` value, e.g. `"ArrowRight"` or `"h"`.
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Mark `modifier` as held.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Alt => self.alt = true,
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Meta => self.meta = true,
            Modifier::Shift => self.shift = true,
        }
        self
    }

    /// Whether `modifier` is held.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Alt => self.alt,
            Modifier::Ctrl => self.ctrl,
            Modifier::Meta => self.meta,
            Modifier::Shift => self.shift,
        }
    }
}

/// Events the site listens for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    Click,
    KeyDown(KeyEvent),
}

impl DomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click => EventKind::Click,
            Self::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    Document,
    Node(NodeId),
}

/// What the host should do with the event's default action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Proceed,
    PreventDefault,
}

impl Outcome {
    /// Combine the outcomes of two listeners for the same event.
    pub fn merge(self, other: Outcome) -> Outcome {
        if self == Outcome::PreventDefault || other == Outcome::PreventDefault {
            Outcome::PreventDefault
        } else {
            Outcome::Proceed
        }
    }
}

/// Handle returned by [`Document::listen`](crate::Document::listen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// An event callback. Documents are single-threaded, so listeners are `Rc`.
pub type Listener = Rc<dyn Fn(&DomEvent) -> Outcome>;
