// Chunk: docs/chunks/tabular_layout - Column-aligned rows for csv/tsv documents
//!
//! Tabular layout: one display line per row, with separator-delimited columns
//! aligned across rows.
//!
//! Column widths are the widest natural width seen for each column within a
//! bounded sample of leading rows. Sampling keeps construction cheap on large
//! files and makes the alignment independent of where the viewport is.

use std::ops::Range;

use lite_layout_text::{ColsText, Loc, Text};

use crate::context::LayoutContext;
use crate::line_layout::LineLayout;

#[derive(Debug, Clone)]
pub struct TabularLayout {
    separator: char,
    /// Leading rows used to size the columns
    sample_rows: usize,
    /// Gap after each column, in standard character widths
    margin_chars: f32,
    col_widths: Vec<f32>,
}

impl TabularLayout {
    /// Creates a tabular layout and sizes its columns.
    ///
    /// # Arguments
    /// * `cx` - Content and metrics to lay out
    /// * `separator` - Column separator (`,` for csv, `\t` for tsv)
    /// * `sample_rows` - Number of leading rows used to size the columns
    /// * `margin_chars` - Gap after each column, in standard character widths
    pub fn new(cx: &LayoutContext, separator: char, sample_rows: usize, margin_chars: f32) -> Self {
        let mut layout = Self {
            separator,
            sample_rows,
            margin_chars,
            col_widths: Vec::new(),
        };
        layout.measure_columns(cx);
        layout
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Aligned width of each column.
    pub fn col_widths(&self) -> &[f32] {
        &self.col_widths
    }

    fn margin(&self, cx: &LayoutContext) -> f32 {
        self.margin_chars * cx.metrics.standard_char_width()
    }

    fn measure_columns(&mut self, cx: &LayoutContext) {
        let margin = self.margin(cx);
        let mut widths: Vec<f32> = Vec::new();
        for row in 0..cx.rows().min(self.sample_rows) {
            let cols = ColsText::new(row, cx.content.text(row), cx.metrics, self.separator, margin);
            for (i, &w) in cols.raw_widths().iter().enumerate() {
                match widths.get_mut(i) {
                    Some(widest) => *widest = widest.max(w),
                    None => widths.push(w),
                }
            }
        }
        tracing::debug!(
            columns = widths.len(),
            sampled = cx.rows().min(self.sample_rows),
            "tabular columns measured"
        );
        self.col_widths = widths;
    }

    #[inline]
    fn clamp_row(cx: &LayoutContext, row: usize) -> usize {
        row.min(cx.rows().saturating_sub(1))
    }
}

impl LineLayout for TabularLayout {
    fn line_size(&self, cx: &LayoutContext) -> usize {
        cx.rows()
    }

    fn text(&self, cx: &LayoutContext, line: usize) -> Text {
        if line >= cx.rows() {
            return Text::sentinel(cx.rows(), cx.metrics.line_height());
        }
        self.row_text_at(cx, line)
    }

    fn row_text_at(&self, cx: &LayoutContext, row: usize) -> Text {
        let row = row.min(cx.rows());
        let mut cols = ColsText::new(
            row,
            cx.content.text(row),
            cx.metrics,
            self.separator,
            self.margin(cx),
        );
        cols.fix_cols(&self.col_widths);
        cols.into_text()
    }

    fn row_to_first_line(&self, cx: &LayoutContext, row: usize) -> usize {
        Self::clamp_row(cx, row)
    }

    fn row_to_last_line(&self, cx: &LayoutContext, row: usize) -> usize {
        Self::clamp_row(cx, row)
    }

    fn line_to_row(&self, cx: &LayoutContext, line: usize) -> usize {
        Self::clamp_row(cx, line)
    }

    fn row_to_line(&self, cx: &LayoutContext, row: usize, _col: usize) -> usize {
        Self::clamp_row(cx, row)
    }

    fn home_col_on_row(&self, _cx: &LayoutContext, _line: usize) -> usize {
        0
    }

    fn refresh(&mut self, cx: &LayoutContext, line: usize) {
        if line < self.sample_rows {
            self.measure_columns(cx);
        }
    }

    fn refresh_at(&mut self, cx: &LayoutContext, start_row: usize, _end_row: usize) {
        if start_row < self.sample_rows {
            self.measure_columns(cx);
        }
    }

    fn loc(&self, cx: &LayoutContext, row: usize, col: usize, lines: Range<usize>) -> Option<Loc> {
        if lines.contains(&row) && row < cx.rows() {
            Some(Loc::new(self.x_on_layout(cx, row, col), self.y_on_layout(cx, row)))
        } else {
            None
        }
    }
}
