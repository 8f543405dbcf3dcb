//! Node handles and typed selectors.

/// Opaque handle to an element owned by a [`Document`](crate::Document).
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the issuing document's registry.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The element queries the site needs, in a form both a CSS engine and the
/// in-memory tree can evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `tag`
    Tag(String),
    /// `tag[attr^="prefix"]`
    AttrPrefix {
        tag: String,
        attr: String,
        prefix: String,
    },
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn attr_prefix(
        tag: impl Into<String>,
        attr: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::AttrPrefix {
            tag: tag.into(),
            attr: attr.into(),
            prefix: prefix.into(),
        }
    }

    /// Render the selector as CSS for `querySelector`.
    pub fn to_css(&self) -> String {
        match self {
            Self::Id(id) => format!("#{id}"),
            Self::Class(class) => format!(".{class}"),
            Self::Tag(tag) => tag.clone(),
            Self::AttrPrefix { tag, attr, prefix } => {
                let escaped = prefix.replace('\\', "\\\\").replace('"', "\\\"");
                format!("{tag}[{attr}^=\"{escaped}\"]")
            }
        }
    }
}
