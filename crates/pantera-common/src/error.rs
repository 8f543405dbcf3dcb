//! Common error types used throughout pantera-site.
//!
//! Every failure here is local: handlers log it and the feature degrades to
//! inactive. Nothing is surfaced to the visitor.

/// Common error type for pantera-site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A collaborator element required at initialization is absent.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// The operation was given empty or otherwise unusable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No identifier matcher recognized the video address.
    #[error("Unrecognized video address: {0}")]
    UnrecognizedAddress(String),

    /// The host document rejected an operation.
    #[error("Document error: {0}")]
    Dom(String),

    /// The site configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new MissingElement error.
    pub fn missing_element<S: Into<String>>(msg: S) -> Self {
        Self::MissingElement(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new UnrecognizedAddress error.
    pub fn unrecognized_address<S: Into<String>>(msg: S) -> Self {
        Self::UnrecognizedAddress(msg.into())
    }

    /// Create a new Dom error.
    pub fn dom<S: Into<String>>(msg: S) -> Self {
        Self::Dom(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
