//! Errors raised by document implementations.

use crate::event::ListenerId;
use crate::node::NodeId;

/// Failure of a document operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node handle does not refer to an element of this document.
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// The listener handle was never registered or is already removed.
    #[error("Unknown listener: {0:?}")]
    UnknownListener(ListenerId),

    /// The host rejected the operation.
    #[error("{op} failed: {message}")]
    Host { op: &'static str, message: String },

    /// No browsing context is available.
    #[error("No window available")]
    NoWindow,
}

impl DomError {
    /// Create a new Host error.
    pub fn host<S: Into<String>>(op: &'static str, message: S) -> Self {
        Self::Host {
            op,
            message: message.into(),
        }
    }
}

impl From<DomError> for pantera_common::Error {
    fn from(err: DomError) -> Self {
        pantera_common::Error::dom(err.to_string())
    }
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DomError>;
