//! Live browser document via `web-sys`.
//!
//! Elements are handed out as [`NodeId`]s keyed by a `data-pantera-node`
//! attribute on the element; the same element always maps to the same handle.
//! Removing an element through the document releases the handles of its
//! whole subtree. Listener closures are owned by the document until
//! [`Document::unlisten`].

use crate::document::Document;
use crate::error::{DomError, Result};
use crate::event::{DomEvent, EventKind, KeyEvent, ListenTarget, Listener, ListenerId, Outcome};
use crate::node::{NodeId, Selector};
use crate::registry::{Registry, KEY_ATTR};
use crate::scroll::{ScrollBehavior, ScrollBlock, ScrollOptions};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent, ScrollIntoViewOptions, ScrollLogicalPosition};

fn host_error(op: &'static str, err: JsValue) -> DomError {
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    DomError::host(op, message)
}

struct WebListener {
    target: web_sys::EventTarget,
    kind: EventKind,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// [`Document`] backed by the page the module is running in.
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
    nodes: RefCell<Registry<Element>>,
    listeners: RefCell<HashMap<ListenerId, WebListener>>,
    listener_seq: Cell<u64>,
}

impl WebDocument {
    /// Bind to the global window's document.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoWindow)?;
        Ok(Self {
            window,
            document,
            nodes: RefCell::new(Registry::new()),
            listeners: RefCell::new(HashMap::new()),
            listener_seq: Cell::new(0),
        })
    }

    fn register(&self, element: Element) -> NodeId {
        let key = element.get_attribute(KEY_ATTR);
        if let Some(node) = self.nodes.borrow().find(key.as_deref(), &element) {
            return node;
        }
        let node = self.nodes.borrow_mut().insert(element.clone());
        if let Err(e) = element.set_attribute(KEY_ATTR, &node.index().to_string()) {
            tracing::warn!("Could not tag element {:?}: {:?}", node, e);
        }
        node
    }

    fn element(&self, node: NodeId) -> Result<Element> {
        self.nodes
            .borrow()
            .get(node)
            .ok_or(DomError::UnknownNode(node))
    }

    /// Release the handles of every registered descendant of `scope`, and of
    /// `scope` itself when `inclusive`.
    fn release_subtree(&self, scope: &Element, inclusive: bool) {
        let mut released = Vec::new();
        if inclusive {
            released.push(scope.clone());
        }
        if let Ok(list) = scope.query_selector_all(&format!("[{KEY_ATTR}]")) {
            released.extend(
                (0..list.length())
                    .filter_map(|i| list.get(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok()),
            );
        }

        let mut nodes = self.nodes.borrow_mut();
        for el in released {
            if let Some(key) = el.get_attribute(KEY_ATTR) {
                if nodes.release_key(&key).is_some() {
                    let _ = el.remove_attribute(KEY_ATTR);
                }
            }
        }
        tracing::trace!("{} elements registered", nodes.len());
    }

    fn event_target(&self, target: ListenTarget) -> Result<web_sys::EventTarget> {
        match target {
            ListenTarget::Document => Ok(self.document.clone().into()),
            ListenTarget::Node(node) => Ok(self.element(node)?.into()),
        }
    }
}

fn to_dom_event(kind: EventKind, event: &web_sys::Event) -> Option<DomEvent> {
    match kind {
        EventKind::Click => Some(DomEvent::Click),
        EventKind::KeyDown => event.dyn_ref::<KeyboardEvent>().map(|k| {
            DomEvent::KeyDown(KeyEvent {
                key: k.key(),
                alt: k.alt_key(),
                ctrl: k.ctrl_key(),
                meta: k.meta_key(),
                shift: k.shift_key(),
            })
        }),
    }
}

impl Document for WebDocument {
    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let list = match self.document.query_selector_all(&selector.to_css()) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("querySelectorAll({}) failed: {:?}", selector.to_css(), e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| self.register(el))
            .collect()
    }

    fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        match self.document.query_selector(&selector.to_css()) {
            Ok(found) => found.map(|el| self.register(el)),
            Err(e) => {
                tracing::warn!("querySelector({}) failed: {:?}", selector.to_css(), e);
                None
            }
        }
    }

    fn query_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        let scope = self.element(scope).ok()?;
        scope
            .query_selector(&selector.to_css())
            .ok()
            .flatten()
            .map(|el| self.register(el))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document.get_element_by_id(id).map(|el| self.register(el))
    }

    fn body(&self) -> Option<NodeId> {
        self.document.body().map(|b| self.register(b.into()))
    }

    fn head(&self) -> Option<NodeId> {
        self.document.head().map(|h| self.register(h.into()))
    }

    fn active_element(&self) -> Option<NodeId> {
        self.document.active_element().map(|el| self.register(el))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).ok()?.get_attribute(name)
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.element(node)?
            .set_attribute(name, value)
            .map_err(|e| host_error("setAttribute", e))
    }

    fn remove_attribute(&self, node: NodeId, name: &str) -> Result<()> {
        self.element(node)?
            .remove_attribute(name)
            .map_err(|e| host_error("removeAttribute", e))
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .map(|el| el.class_list().contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, node: NodeId, class: &str) -> Result<()> {
        self.element(node)?
            .class_list()
            .add_1(class)
            .map_err(|e| host_error("classList.add", e))
    }

    fn remove_class(&self, node: NodeId, class: &str) -> Result<()> {
        self.element(node)?
            .class_list()
            .remove_1(class)
            .map_err(|e| host_error("classList.remove", e))
    }

    fn text_content(&self, node: NodeId) -> String {
        self.element(node)
            .ok()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn set_text_content(&self, node: NodeId, text: &str) -> Result<()> {
        self.element(node)?.set_text_content(Some(text));
        Ok(())
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        let el = self
            .document
            .create_element(tag)
            .map_err(|e| host_error("createElement", e))?;
        Ok(self.register(el))
    }

    fn append_child(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent = self.element(parent)?;
        let child = self.element(child)?;
        parent
            .append_child(&child)
            .map(|_| ())
            .map_err(|e| host_error("appendChild", e))
    }

    fn clear_children(&self, node: NodeId) -> Result<()> {
        let el = self.element(node)?;
        self.release_subtree(&el, false);
        el.set_inner_html("");
        Ok(())
    }

    fn remove(&self, node: NodeId) -> Result<()> {
        let el = self.element(node)?;
        self.release_subtree(&el, true);
        el.remove();
        Ok(())
    }

    fn focus(&self, node: NodeId) -> Result<()> {
        let el = self.element(node)?;
        match el.dyn_ref::<HtmlElement>() {
            Some(html) => html.focus().map_err(|e| host_error("focus", e)),
            None => Ok(()),
        }
    }

    fn scroll_into_view(&self, node: NodeId, options: ScrollOptions) -> Result<()> {
        let el = self.element(node)?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(match options.behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        opts.set_block(match options.block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Center => ScrollLogicalPosition::Center,
            ScrollBlock::End => ScrollLogicalPosition::End,
            ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        });
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }

    fn push_fragment(&self, fragment: &str) -> Result<()> {
        self.window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(fragment)))
            .map_err(|e| host_error("history.pushState", e))
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.window
            .location()
            .set_href(href)
            .map_err(|e| host_error("location.href", e))
    }

    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()> {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis,
            )
            .map(|_| ())
            .map_err(|e| host_error("setTimeout", e))
    }

    fn listen(
        &self,
        target: ListenTarget,
        kind: EventKind,
        listener: Listener,
    ) -> Result<ListenerId> {
        let target = self.event_target(target)?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(dom_event) = to_dom_event(kind, &event) {
                if listener(&dom_event) == Outcome::PreventDefault {
                    event.prevent_default();
                }
            }
        });
        target
            .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|e| host_error("addEventListener", e))?;

        let id = ListenerId(self.listener_seq.get());
        self.listener_seq.set(id.0 + 1);
        self.listeners.borrow_mut().insert(
            id,
            WebListener {
                target,
                kind,
                closure,
            },
        );
        Ok(id)
    }

    fn unlisten(&self, id: ListenerId) -> Result<()> {
        let registered = self
            .listeners
            .borrow_mut()
            .remove(&id)
            .ok_or(DomError::UnknownListener(id))?;
        registered
            .target
            .remove_event_listener_with_callback(
                registered.kind.as_str(),
                registered.closure.as_ref().unchecked_ref(),
            )
            .map_err(|e| host_error("removeEventListener", e))
    }
}
