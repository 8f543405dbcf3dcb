use pantera_common::Result;
use pantera_dom::{
    Document, DomEvent, EventKind, ListenTarget, ListenerId, Outcome, ScrollBlock, ScrollOptions,
    Selector,
};
use std::rc::Rc;

/// Handle activation of an in-page link targeting `href`.
///
/// A bare `#` and fragments with no matching element are left alone.
/// Otherwise the target is scrolled to, made focusable if needed, focused,
/// and the fragment is pushed to the address bar.
pub fn scroll_to_fragment<D: Document + ?Sized>(doc: &D, href: &str) -> Result<Outcome> {
    let fragment = match href.strip_prefix('#') {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => return Ok(Outcome::Proceed),
    };
    let Some(target) = doc.element_by_id(fragment) else {
        return Ok(Outcome::Proceed);
    };

    doc.scroll_into_view(target, ScrollOptions::smooth(ScrollBlock::Start))?;
    if !doc.has_attribute(target, "tabindex") {
        doc.set_attribute(target, "tabindex", "-1")?;
    }
    doc.focus(target)?;
    doc.push_fragment(href)?;
    Ok(Outcome::PreventDefault)
}

/// Attach [`scroll_to_fragment`] to every `a[href^="#"]`.
pub fn wire_anchor_links<D: Document + 'static>(doc: &Rc<D>) -> Result<Vec<ListenerId>> {
    let links = doc.query_all(&Selector::attr_prefix("a", "href", "#"));
    let mut listeners = Vec::with_capacity(links.len());

    for link in links {
        let weak = Rc::downgrade(doc);
        let id = doc.listen(
            ListenTarget::Node(link),
            EventKind::Click,
            Rc::new(move |_: &DomEvent| {
                let Some(doc) = weak.upgrade() else {
                    return Outcome::Proceed;
                };
                let Some(href) = doc.attribute(link, "href") else {
                    return Outcome::Proceed;
                };
                scroll_to_fragment(&*doc, &href).unwrap_or_else(|e| {
                    tracing::warn!("In-page navigation to {} failed: {}", href, e);
                    Outcome::Proceed
                })
            }),
        )?;
        listeners.push(id);
    }

    tracing::debug!("Wired {} in-page links", listeners.len());
    Ok(listeners)
}
