use crate::config::AccessibilityConfig;
use pantera_common::{Error, Result};
use pantera_dom::{Document, NodeId, Selector};
use std::rc::Rc;

/// Append a transient polite live region carrying `message`.
///
/// The region removes itself once the configured lifetime has elapsed, which
/// gives screen readers time to pick it up. Returns the region's node.
pub fn announce<D: Document + 'static>(
    doc: &Rc<D>,
    message: &str,
    config: &AccessibilityConfig,
) -> Result<NodeId> {
    let body = doc.body().ok_or_else(|| Error::missing_element("body"))?;

    let region = doc.create_element("div")?;
    doc.set_attribute(region, "role", "status")?;
    doc.set_attribute(region, "aria-live", "polite")?;
    doc.set_attribute(region, "aria-atomic", "true")?;
    doc.set_attribute(region, "class", &config.sr_only_class)?;
    doc.set_text_content(region, message)?;
    doc.append_child(body, region)?;

    let weak = Rc::downgrade(doc);
    doc.set_timeout(
        config.announcement_lifetime(),
        Box::new(move || {
            if let Some(doc) = weak.upgrade() {
                if let Err(e) = doc.remove(region) {
                    tracing::warn!("Failed to remove live region: {}", e);
                }
            }
        }),
    )?;

    tracing::debug!("Announced: {}", message);
    Ok(region)
}

/// Announce the page's primary heading, if it has one.
pub fn announce_page_load<D: Document + 'static>(
    doc: &Rc<D>,
    config: &AccessibilityConfig,
) -> Result<Option<NodeId>> {
    let Some(heading) = doc.query_first(&Selector::tag(&config.heading_tag)) else {
        tracing::debug!("No <{}> on this page; skipping load announcement", config.heading_tag);
        return Ok(None);
    };

    let title = doc.text_content(heading);
    let message = format!("{}{}", config.page_loaded_prefix, title.trim());
    announce(doc, &message, config).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantera_dom::MemoryDocument;
    use std::time::Duration;

    #[test]
    fn test_announce_region_lifecycle() {
        let doc = Rc::new(MemoryDocument::default());
        let config = AccessibilityConfig::default();

        let region = announce(&doc, "Reproduciendo", &config).unwrap();
        assert!(doc.is_attached(region));
        assert_eq!(doc.attribute(region, "role").as_deref(), Some("status"));
        assert_eq!(doc.attribute(region, "aria-live").as_deref(), Some("polite"));
        assert_eq!(doc.attribute(region, "aria-atomic").as_deref(), Some("true"));
        assert!(doc.has_class(region, "sr-only"));
        assert_eq!(doc.text_content(region), "Reproduciendo");

        doc.advance(Duration::from_millis(999));
        assert!(doc.is_attached(region));

        doc.advance(Duration::from_millis(1));
        assert!(!doc.is_attached(region));
    }

    #[test]
    fn test_page_load_uses_heading_text() {
        let doc = Rc::new(MemoryDocument::new("/gallery.html"));
        doc.text_element(doc.body().unwrap(), "h1", &[], "  Galería  ");

        let region = announce_page_load(&doc, &AccessibilityConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(doc.text_content(region), "Página cargada: Galería");
    }

    #[test]
    fn test_page_load_without_heading() {
        let doc = Rc::new(MemoryDocument::default());
        let region = announce_page_load(&doc, &AccessibilityConfig::default()).unwrap();
        assert!(region.is_none());
        assert_eq!(doc.pending_timers(), 0);
    }

    #[test]
    fn test_timer_outliving_document_is_harmless() {
        let doc = Rc::new(MemoryDocument::default());
        announce(&doc, "bye", &AccessibilityConfig::default()).unwrap();
        let weak = Rc::downgrade(&doc);
        drop(doc);
        assert!(weak.upgrade().is_none());
    }
}
