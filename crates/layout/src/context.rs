// Chunk: docs/chunks/wrap_layout - Borrowed capabilities passed to layout strategies

use lite_layout_text::{Content, FontMetrics};

/// The document and font a layout strategy works against.
///
/// Strategies own only their derived state (the sub-line index, column
/// widths). Every query borrows the content and metrics for its duration, so a
/// strategy can never hold a stale reference to either.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub content: &'a dyn Content,
    pub metrics: &'a dyn FontMetrics,
}

impl<'a> LayoutContext<'a> {
    pub fn new(content: &'a dyn Content, metrics: &'a dyn FontMetrics) -> Self {
        Self { content, metrics }
    }

    /// Row count of the content.
    #[inline]
    pub fn rows(&self) -> usize {
        self.content.rows()
    }
}
