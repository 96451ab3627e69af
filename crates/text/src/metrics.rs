// Chunk: docs/chunks/text_measure - Font metrics capability

//! Font metrics consumed by the layout engine.
//!
//! The layout never measures glyphs itself. It asks a [`FontMetrics`] for the
//! advance of each character plus a handful of font-wide values. Metrics are
//! shared between the screen layout and its owner, and may change underneath
//! the layout (zoom, font swap). Every change bumps [`FontMetrics::generation`],
//! which the screen layout compares against the generation it last laid out
//! with.

use std::cell::Cell;

use unicode_width::UnicodeWidthChar;

/// Character measurement capability.
pub trait FontMetrics {
    /// Advance of the reference character, used for wrap widths and tabs.
    fn standard_char_width(&self) -> f32;

    /// Height of one display line in pixels.
    fn line_height(&self) -> f32;

    /// Number of columns between tab stops.
    fn tab_size(&self) -> usize;

    /// Advance width of a single character in pixels.
    fn advance(&self, ch: char) -> f32;

    /// Monotonic counter bumped whenever any measurement changes.
    fn generation(&self) -> u64 {
        0
    }
}

// =============================================================================
// MonospaceMetrics
// =============================================================================

/// Cell-based metrics: every character is a multiple of one cell wide.
///
/// Wide (East Asian) characters take two cells, zero-width and control
/// characters take none. Values can be changed through a shared reference so
/// that one instance can be held by several layouts through an `Rc`.
#[derive(Debug, Clone)]
pub struct MonospaceMetrics {
    /// Width of a single cell in pixels
    char_width: Cell<f32>,
    /// Height of a line in pixels
    line_height: Cell<f32>,
    /// Columns per tab stop
    tab_size: Cell<usize>,
    generation: Cell<u64>,
}

impl MonospaceMetrics {
    /// Creates metrics with the given cell size and a tab size of 4.
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width: Cell::new(char_width),
            line_height: Cell::new(line_height),
            tab_size: Cell::new(4),
            generation: Cell::new(0),
        }
    }

    /// Builder-style tab size override.
    pub fn with_tab_size(self, tab_size: usize) -> Self {
        self.tab_size.set(tab_size.max(1));
        self
    }

    /// Changes the cell width, e.g. after a zoom.
    pub fn set_char_width(&self, char_width: f32) {
        self.char_width.set(char_width);
        self.bump();
    }

    /// Changes the line height.
    pub fn set_line_height(&self, line_height: f32) {
        self.line_height.set(line_height);
        self.bump();
    }

    /// Changes the tab size. Values below 1 are raised to 1.
    pub fn set_tab_size(&self, tab_size: usize) {
        self.tab_size.set(tab_size.max(1));
        self.bump();
    }

    fn bump(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl FontMetrics for MonospaceMetrics {
    #[inline]
    fn standard_char_width(&self) -> f32 {
        self.char_width.get()
    }

    #[inline]
    fn line_height(&self) -> f32 {
        self.line_height.get()
    }

    #[inline]
    fn tab_size(&self) -> usize {
        self.tab_size.get()
    }

    fn advance(&self, ch: char) -> f32 {
        match ch.width() {
            Some(cells) => cells as f32 * self.char_width.get(),
            None => 0.0,
        }
    }

    #[inline]
    fn generation(&self) -> u64 {
        self.generation.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_one_cell() {
        let fm = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(fm.advance('a'), 10.0);
        assert_eq!(fm.advance(' '), 10.0);
    }

    #[test]
    fn test_wide_char_is_two_cells() {
        let fm = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(fm.advance('日'), 20.0);
    }

    #[test]
    fn test_control_chars_have_no_advance() {
        let fm = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(fm.advance('\n'), 0.0);
        assert_eq!(fm.advance('\r'), 0.0);
        assert_eq!(fm.advance('\t'), 0.0);
    }

    #[test]
    fn test_setters_bump_generation() {
        let fm = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(fm.generation(), 0);
        fm.set_char_width(12.0);
        fm.set_line_height(24.0);
        assert_eq!(fm.generation(), 2);
        assert_eq!(fm.standard_char_width(), 12.0);
        assert_eq!(fm.line_height(), 24.0);
    }

    #[test]
    fn test_tab_size_floor() {
        let fm = MonospaceMetrics::default().with_tab_size(0);
        assert_eq!(fm.tab_size(), 1);
    }
}
