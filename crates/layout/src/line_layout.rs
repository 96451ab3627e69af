// Chunk: docs/chunks/wrap_layout - Line layout strategies and the sub-line index
//!
//! The line layout contract.
//!
//! A line layout turns the rows of a document into a flat, addressable
//! sequence of display lines. Three strategies implement it:
//!
//! - [`PlainLayout`]: one display line per row
//! - [`WrapLayout`]: rows wrapped to a character budget, backed by a sub-line
//!   index
//! - [`TabularLayout`]: one display line per row, with csv/tsv columns aligned
//!
//! [`Layout`] is the runtime-selected strategy. Switching modes builds a new
//! `Layout` value; nothing is converted in place.
//!
//! Every row, line and column argument is clamped into range. Asking for the
//! text of a line at or past [`LineLayout::line_size`] yields an empty sentinel
//! line anchored one row past the last row, which is where a caret sits after
//! the end of the document.

use std::ops::Range;

use lite_layout_text::{Loc, Text};

use crate::context::LayoutContext;
use crate::plain_layout::PlainLayout;
use crate::tabular_layout::TabularLayout;
use crate::wrap_layout::WrapLayout;

/// Translation between document rows and display lines.
pub trait LineLayout {
    /// Number of display lines.
    fn line_size(&self, cx: &LayoutContext) -> usize;

    /// Number of document rows.
    fn row_size(&self, cx: &LayoutContext) -> usize {
        cx.rows()
    }

    /// Renders one display line.
    fn text(&self, cx: &LayoutContext, line: usize) -> Text;

    /// Renders the display lines in `[start_line, end_line)`, clamped to the
    /// layout. The sentinel line is never included.
    fn texts(&self, cx: &LayoutContext, start_line: usize, end_line: usize) -> Vec<Text> {
        let end = end_line.min(self.line_size(cx));
        (start_line.min(end)..end).map(|line| self.text(cx, line)).collect()
    }

    /// Renders a whole row as this layout would measure it.
    fn row_text_at(&self, cx: &LayoutContext, row: usize) -> Text {
        let row = row.min(cx.rows());
        Text::of_row(row, cx.content.text(row), cx.metrics)
    }

    /// First display line of `row`.
    fn row_to_first_line(&self, cx: &LayoutContext, row: usize) -> usize;

    /// Last display line of `row`.
    fn row_to_last_line(&self, cx: &LayoutContext, row: usize) -> usize;

    /// Row that owns display line `line`.
    fn line_to_row(&self, cx: &LayoutContext, line: usize) -> usize;

    /// Display line that shows column `col` of `row`.
    fn row_to_line(&self, cx: &LayoutContext, row: usize, col: usize) -> usize;

    /// Wrap width in characters; 0 when the layout does not wrap.
    fn chars_in_line(&self) -> usize {
        0
    }

    /// Changes the wrap width. Non-wrapping layouts ignore this.
    fn set_chars_in_line(&mut self, _cx: &LayoutContext, _chars: usize) {}

    /// Row column at which display line `line` starts.
    fn home_col_on_row(&self, cx: &LayoutContext, line: usize) -> usize;

    /// Row column at which display line `line` ends, terminator excluded.
    fn end_col_on_row(&self, cx: &LayoutContext, line: usize) -> usize {
        let text = self.text(cx, line);
        text.from_index() + text.text_length()
    }

    /// Row column under pixel offset `x` on display line `line`.
    fn x_to_col(&self, cx: &LayoutContext, line: usize, x: f32) -> usize {
        let text = self.text(cx, line);
        text.from_index() + text.index_to(x)
    }

    /// Like [`x_to_col`](Self::x_to_col), but rounds to the nearest caret gap
    /// instead of the character under `x`.
    fn x_to_mid_col(&self, cx: &LayoutContext, line: usize, x: f32) -> usize {
        self.x_to_col(cx, line, x + cx.metrics.standard_char_width() / 2.0)
    }

    /// Pixel x of row column `col` on display line `line`.
    fn x_on_layout(&self, cx: &LayoutContext, line: usize, col: usize) -> f32 {
        let text = self.text(cx, line);
        text.width_to(col.saturating_sub(text.from_index()))
    }

    /// Pixel y of the top of display line `line`.
    fn y_on_layout(&self, cx: &LayoutContext, line: usize) -> f32 {
        line as f32 * cx.metrics.line_height()
    }

    /// Invalidates every display line from `line` onward.
    fn refresh(&mut self, cx: &LayoutContext, line: usize);

    /// Replaces the rows `[start_row, end_row)` as numbered before an edit.
    ///
    /// The content's new row count tells the layout how many rows the edit
    /// added or removed.
    fn refresh_at(&mut self, cx: &LayoutContext, start_row: usize, end_row: usize);

    /// Pixel location of (`row`, `col`), searched only within `lines`.
    fn loc(&self, cx: &LayoutContext, row: usize, col: usize, lines: Range<usize>) -> Option<Loc>;

    fn line_height(&self, cx: &LayoutContext) -> f32 {
        cx.metrics.line_height()
    }

    fn standard_char_width(&self, cx: &LayoutContext) -> f32 {
        cx.metrics.standard_char_width()
    }

    fn tab_size(&self, cx: &LayoutContext) -> usize {
        cx.metrics.tab_size()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Which strategy a [`Layout`] is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Plain,
    Wrapped,
    /// Tabular layout with the given column separator
    Tabular(char),
}

/// The active line layout strategy.
#[derive(Debug, Clone)]
pub enum Layout {
    Plain(PlainLayout),
    Wrapped(WrapLayout),
    Tabular(TabularLayout),
}

impl Layout {
    pub fn mode(&self) -> LayoutMode {
        match self {
            Layout::Plain(_) => LayoutMode::Plain,
            Layout::Wrapped(_) => LayoutMode::Wrapped,
            Layout::Tabular(t) => LayoutMode::Tabular(t.separator()),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Layout::Plain(_))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Plain(PlainLayout)
    }
}

macro_rules! dispatch {
    ($self:expr, $l:ident => $body:expr) => {
        match $self {
            Layout::Plain($l) => $body,
            Layout::Wrapped($l) => $body,
            Layout::Tabular($l) => $body,
        }
    };
}

impl LineLayout for Layout {
    fn line_size(&self, cx: &LayoutContext) -> usize {
        dispatch!(self, l => l.line_size(cx))
    }

    fn row_size(&self, cx: &LayoutContext) -> usize {
        dispatch!(self, l => l.row_size(cx))
    }

    fn text(&self, cx: &LayoutContext, line: usize) -> Text {
        dispatch!(self, l => l.text(cx, line))
    }

    fn texts(&self, cx: &LayoutContext, start_line: usize, end_line: usize) -> Vec<Text> {
        dispatch!(self, l => l.texts(cx, start_line, end_line))
    }

    fn row_text_at(&self, cx: &LayoutContext, row: usize) -> Text {
        dispatch!(self, l => l.row_text_at(cx, row))
    }

    fn row_to_first_line(&self, cx: &LayoutContext, row: usize) -> usize {
        dispatch!(self, l => l.row_to_first_line(cx, row))
    }

    fn row_to_last_line(&self, cx: &LayoutContext, row: usize) -> usize {
        dispatch!(self, l => l.row_to_last_line(cx, row))
    }

    fn line_to_row(&self, cx: &LayoutContext, line: usize) -> usize {
        dispatch!(self, l => l.line_to_row(cx, line))
    }

    fn row_to_line(&self, cx: &LayoutContext, row: usize, col: usize) -> usize {
        dispatch!(self, l => l.row_to_line(cx, row, col))
    }

    fn chars_in_line(&self) -> usize {
        dispatch!(self, l => l.chars_in_line())
    }

    fn set_chars_in_line(&mut self, cx: &LayoutContext, chars: usize) {
        dispatch!(self, l => l.set_chars_in_line(cx, chars))
    }

    fn home_col_on_row(&self, cx: &LayoutContext, line: usize) -> usize {
        dispatch!(self, l => l.home_col_on_row(cx, line))
    }

    fn end_col_on_row(&self, cx: &LayoutContext, line: usize) -> usize {
        dispatch!(self, l => l.end_col_on_row(cx, line))
    }

    fn x_to_col(&self, cx: &LayoutContext, line: usize, x: f32) -> usize {
        dispatch!(self, l => l.x_to_col(cx, line, x))
    }

    fn x_to_mid_col(&self, cx: &LayoutContext, line: usize, x: f32) -> usize {
        dispatch!(self, l => l.x_to_mid_col(cx, line, x))
    }

    fn x_on_layout(&self, cx: &LayoutContext, line: usize, col: usize) -> f32 {
        dispatch!(self, l => l.x_on_layout(cx, line, col))
    }

    fn y_on_layout(&self, cx: &LayoutContext, line: usize) -> f32 {
        dispatch!(self, l => l.y_on_layout(cx, line))
    }

    fn refresh(&mut self, cx: &LayoutContext, line: usize) {
        dispatch!(self, l => l.refresh(cx, line))
    }

    fn refresh_at(&mut self, cx: &LayoutContext, start_row: usize, end_row: usize) {
        dispatch!(self, l => l.refresh_at(cx, start_row, end_row))
    }

    fn loc(&self, cx: &LayoutContext, row: usize, col: usize, lines: Range<usize>) -> Option<Loc> {
        dispatch!(self, l => l.loc(cx, row, col, lines))
    }
}
