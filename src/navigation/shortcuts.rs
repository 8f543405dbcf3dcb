use crate::config::{Shortcut, ShortcutsConfig};
use pantera_common::{Modifier, Result};
use pantera_dom::{Document, DomEvent, EventKind, KeyEvent, ListenTarget, ListenerId, Outcome};
use std::rc::Rc;

/// Address bound to `event`, if the modifier is held and the key matches.
pub fn shortcut_target<'a>(
    event: &KeyEvent,
    modifier: Modifier,
    bindings: &'a [Shortcut],
) -> Option<&'a str> {
    if !event.has_modifier(modifier) {
        return None;
    }
    bindings
        .iter()
        .find(|s| s.key == event.key)
        .map(|s| s.href.as_str())
}

/// Listen document-wide for the configured modifier+letter bindings.
pub fn register_shortcuts<D: Document + 'static>(
    doc: &Rc<D>,
    config: &ShortcutsConfig,
) -> Result<ListenerId> {
    let weak = Rc::downgrade(doc);
    let modifier = config.modifier;
    let bindings = config.bindings.clone();

    let id = doc.listen(
        ListenTarget::Document,
        EventKind::KeyDown,
        Rc::new(move |event: &DomEvent| {
            let DomEvent::KeyDown(key) = event else {
                return Outcome::Proceed;
            };
            let Some(href) = shortcut_target(key, modifier, &bindings) else {
                return Outcome::Proceed;
            };
            let Some(doc) = weak.upgrade() else {
                return Outcome::Proceed;
            };
            tracing::debug!("Shortcut {}+{} -> {}", modifier, key.key, href);
            if let Err(e) = doc.navigate(href) {
                tracing::warn!("Shortcut navigation to {} failed: {}", href, e);
            }
            Outcome::PreventDefault
        }),
    )?;
    Ok(id)
}
