//! Scroll-into-view options.

/// Scroll animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Vertical alignment of the scrolled element within the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// Options for [`Document::scroll_into_view`](crate::Document::scroll_into_view).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scrolling aligned to `block`.
    pub fn smooth(block: ScrollBlock) -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block,
        }
    }
}
