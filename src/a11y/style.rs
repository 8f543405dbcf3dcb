use crate::config::AccessibilityConfig;
use pantera_common::{Error, Result};
use pantera_dom::{Document, NodeId};

/// CSS that hides an element visually while keeping it in the
/// accessibility tree.
pub fn sr_only_css(class: &str) -> String {
    format!(
        ".{class} {{\n    position: absolute;\n    width: 1px;\n    height: 1px;\n    padding: 0;\n    margin: -1px;\n    overflow: hidden;\n    clip: rect(0, 0, 0, 0);\n    white-space: nowrap;\n    border: 0;\n}}\n"
    )
}

/// Attribute counting the installs currently holding the injected style.
const REFS_ATTR: &str = "data-refs";

fn ref_count<D: Document + ?Sized>(doc: &D, style: NodeId) -> u32 {
    doc.attribute(style, REFS_ATTR)
        .and_then(|refs| refs.parse().ok())
        .unwrap_or(0)
}

/// Attach the screen-reader-only rule to the document head, or take another
/// reference on the one already present.
///
/// The rule exists exactly once however often this runs. Every successful
/// call must be paired with [`release_sr_only_style`].
pub fn inject_sr_only_style<D: Document + ?Sized>(
    doc: &D,
    config: &AccessibilityConfig,
) -> Result<NodeId> {
    if let Some(style) = doc.element_by_id(&config.style_id) {
        let refs = ref_count(doc, style) + 1;
        doc.set_attribute(style, REFS_ATTR, &refs.to_string())?;
        tracing::debug!("Style #{} already present ({} holders)", config.style_id, refs);
        return Ok(style);
    }

    let parent = doc
        .head()
        .or_else(|| doc.body())
        .ok_or_else(|| Error::missing_element("head"))?;

    let style = doc.create_element("style")?;
    doc.set_attribute(style, "id", &config.style_id)?;
    doc.set_attribute(style, REFS_ATTR, "1")?;
    doc.set_text_content(style, &sr_only_css(&config.sr_only_class))?;
    doc.append_child(parent, style)?;
    Ok(style)
}

/// Drop one reference on the injected style, removing it with the last.
///
/// Returns whether the style was removed.
pub fn release_sr_only_style<D: Document + ?Sized>(doc: &D, style: NodeId) -> Result<bool> {
    let refs = ref_count(doc, style).saturating_sub(1);
    if refs == 0 {
        doc.remove(style)?;
        return Ok(true);
    }
    doc.set_attribute(style, REFS_ATTR, &refs.to_string())?;
    Ok(false)
}
