//! Identifier matchers.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&?/]+)")
        .expect("URL shape pattern is valid")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]{11})$").expect("bare id pattern is valid"));

/// A platform video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One way of recognizing an identifier in an address.
///
/// Matchers are independent: none relies on another having failed first.
pub trait IdentifierMatcher: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// The identifier slice of `address`, if this matcher recognizes it.
    fn extract<'a>(&self, address: &'a str) -> Option<&'a str>;
}

/// Watch URLs (`youtube.com/watch?v=`), short links (`youtu.be/`) and embed
/// URLs (`youtube.com/embed/`). Captures up to the next `&`, `?` or `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlShapeMatcher;

impl IdentifierMatcher for UrlShapeMatcher {
    fn name(&self) -> &'static str {
        "url-shape"
    }

    fn extract<'a>(&self, address: &'a str) -> Option<&'a str> {
        URL_SHAPE
            .captures(address)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// A raw identifier: exactly 11 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareIdMatcher;

impl IdentifierMatcher for BareIdMatcher {
    fn name(&self) -> &'static str {
        "bare-id"
    }

    fn extract<'a>(&self, address: &'a str) -> Option<&'a str> {
        BARE_ID
            .captures(address)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// Ordered list of matchers; the first to match wins.
pub struct Extractor {
    matchers: Vec<Box<dyn IdentifierMatcher>>,
}

impl Extractor {
    /// An extractor trying `matchers` in the given order.
    pub fn new(matchers: Vec<Box<dyn IdentifierMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    pub fn extract(&self, address: &str) -> Option<VideoId> {
        self.matchers.iter().find_map(|matcher| {
            matcher
                .extract(address)
                .filter(|id| !id.is_empty())
                .map(|id| VideoId(id.to_string()))
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![Box::new(UrlShapeMatcher), Box::new(BareIdMatcher)])
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("matchers", &self.matcher_names())
            .finish()
    }
}
