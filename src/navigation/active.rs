use crate::config::NavigationConfig;
use pantera_common::Result;
use pantera_dom::{Document, NodeId, Selector};

/// Final path segment of `path`, or `index_page` when there is none.
pub fn current_page<'a>(path: &'a str, index_page: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => index_page,
    }
}

/// Whether a navigation entry targeting `href` represents `current`.
pub fn is_current(href: &str, current: &str, index_page: &str) -> bool {
    href == current || (current.is_empty() && href == index_page)
}

/// Clear every navigation entry, then mark the one for the current page.
///
/// At most one entry ends active: the first in document order whose target
/// matches. Running this again without a location change yields the same
/// marking.
pub fn mark_active_link<D: Document + ?Sized>(
    doc: &D,
    config: &NavigationConfig,
) -> Result<Option<NodeId>> {
    let path = doc.location_path();
    let current = current_page(&path, &config.index_page);

    let mut active = None;
    for link in doc.query_all(&Selector::class(&config.link_class)) {
        doc.remove_class(link, &config.active_class)?;
        doc.remove_attribute(link, "aria-current")?;

        if active.is_some() {
            continue;
        }
        let matches = doc
            .attribute(link, "href")
            .is_some_and(|href| is_current(&href, current, &config.index_page));
        if matches {
            doc.add_class(link, &config.active_class)?;
            doc.set_attribute(link, "aria-current", "page")?;
            active = Some(link);
        }
    }

    match active {
        Some(_) => tracing::debug!("Marked navigation entry for {} active", current),
        None => tracing::debug!("No navigation entry targets {}", current),
    }
    Ok(active)
}
