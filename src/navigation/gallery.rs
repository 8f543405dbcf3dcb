use crate::config::GalleryConfig;
use pantera_common::{NavKey, Result};
use pantera_dom::{Document, DomEvent, EventKind, ListenTarget, ListenerId, NodeId, Outcome, Selector};
use std::rc::Rc;

/// Gallery items made keyboard-navigable, in document order.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    pub items: Vec<NodeId>,
    pub listeners: Vec<ListenerId>,
}

/// Move focus within `items` from position `index` according to `key`.
///
/// Returns `PreventDefault` for any roving key, including at the ends of the
/// group where focus stays put.
pub fn rove<D: Document + ?Sized>(
    doc: &D,
    items: &[NodeId],
    index: usize,
    key: &str,
) -> Result<Outcome> {
    let Some(nav) = NavKey::from_key(key) else {
        return Ok(Outcome::Proceed);
    };
    if let Some(next) = nav.target(index, items.len()) {
        doc.focus(items[next])?;
    }
    Ok(Outcome::PreventDefault)
}

/// Make every gallery item with an image and a caption focusable, labelled
/// and arrow-key navigable.
pub fn enhance_gallery<D: Document + 'static>(
    doc: &Rc<D>,
    config: &GalleryConfig,
) -> Result<Gallery> {
    let image_selector = Selector::class(&config.image_class);
    let caption_selector = Selector::class(&config.caption_class);

    let mut items = Vec::new();
    for item in doc.query_all(&Selector::class(&config.item_class)) {
        let (Some(_), Some(caption)) = (
            doc.query_within(item, &image_selector),
            doc.query_within(item, &caption_selector),
        ) else {
            continue;
        };
        doc.set_attribute(item, "tabindex", "0")?;
        doc.set_attribute(item, "role", "figure")?;
        doc.set_attribute(item, "aria-label", doc.text_content(caption).trim())?;
        items.push(item);
    }

    let shared: Rc<[NodeId]> = items.clone().into();
    let mut listeners = Vec::with_capacity(items.len());
    for (index, &item) in items.iter().enumerate() {
        let weak = Rc::downgrade(doc);
        let group = Rc::clone(&shared);
        let id = doc.listen(
            ListenTarget::Node(item),
            EventKind::KeyDown,
            Rc::new(move |event: &DomEvent| {
                let DomEvent::KeyDown(key) = event else {
                    return Outcome::Proceed;
                };
                let Some(doc) = weak.upgrade() else {
                    return Outcome::Proceed;
                };
                rove(&*doc, &group, index, &key.key).unwrap_or_else(|e| {
                    tracing::warn!("Gallery focus move failed: {}", e);
                    Outcome::PreventDefault
                })
            }),
        )?;
        listeners.push(id);
    }

    if !items.is_empty() {
        tracing::debug!("Enhanced {} gallery items", items.len());
    }
    Ok(Gallery { items, listeners })
}
