// Chunk: docs/chunks/wrap_layout - Soft wrapping backed by the sub-line index
//!
//! Soft line wrapping for proportional fonts.
//!
//! Each row is measured and split greedily at `chars_in_line × standard char
//! width` pixels (see [`SubText::split`]). One [`SubRange`] per segment is
//! stored in a [`SubLineIndex`], which makes every row↔line query a binary
//! search instead of a scan over the document.
//!
//! Only span metadata is stored. Text is re-measured on demand, so an index
//! entry is a handful of integers no matter how long the row is.
//!
//! # Incremental refresh
//!
//! Edits never force a full rebuild:
//!
//! - [`refresh_at`](LineLayout::refresh_at) re-splits only the edited rows and
//!   bulk-shifts the row numbers of the records behind them
//! - [`refresh`](LineLayout::refresh) rebuilds a suffix of the document,
//!   starting at the row that owns the given line

use std::ops::Range;
use std::time::Instant;

use lite_layout_text::{Loc, SubText, Text};

use crate::context::LayoutContext;
use crate::line_layout::LineLayout;
use crate::sub_range::{SubLineIndex, SubRange};

/// Wrapped layout state: the wrap width and the sub-line index.
#[derive(Debug, Clone, Default)]
pub struct WrapLayout {
    /// Character budget per display line; 0 disables wrapping
    chars_in_line: usize,
    index: SubLineIndex,
}

impl WrapLayout {
    /// Builds a wrapped layout over the whole document.
    ///
    /// # Arguments
    /// * `cx` - Content and metrics to lay out
    /// * `chars_in_line` - Wrap width in standard characters
    pub fn new(cx: &LayoutContext, chars_in_line: usize) -> Self {
        let mut layout = Self {
            chars_in_line,
            index: SubLineIndex::new(),
        };
        layout.rebuild(cx);
        layout
    }

    /// Like [`new`](Self::new), but refuses documents with `row_limit` rows or
    /// more.
    pub fn try_new(cx: &LayoutContext, chars_in_line: usize, row_limit: usize) -> Option<Self> {
        if cx.rows() >= row_limit {
            tracing::warn!(
                rows = cx.rows(),
                row_limit,
                "document too large to wrap, keeping current layout"
            );
            return None;
        }
        Some(Self::new(cx, chars_in_line))
    }

    /// The sub-line index, one record per display line.
    pub fn index(&self) -> &SubLineIndex {
        &self.index
    }

    fn wrap_width(&self, cx: &LayoutContext) -> f32 {
        self.chars_in_line as f32 * cx.metrics.standard_char_width()
    }

    /// Splits one row into its sub-line records.
    fn sub_ranges(&self, cx: &LayoutContext, row: usize) -> Vec<SubRange> {
        let text = self.row_text_at(cx, row);
        let subs = SubText::split(&text, self.wrap_width(cx));
        let n = subs.len();
        subs.iter()
            .enumerate()
            .map(|(i, sub)| SubRange::new(row, i, n, sub.from_index(), sub.to_index()))
            .collect()
    }

    fn rebuild(&mut self, cx: &LayoutContext) {
        let start = Instant::now();
        self.index = SubLineIndex::new();
        self.build_from(cx, 0);
        tracing::debug!(
            rows = cx.rows(),
            lines = self.index.len(),
            chars_in_line = self.chars_in_line,
            elapsed_us = start.elapsed().as_micros() as u64,
            "wrap layout rebuilt"
        );
    }

    fn build_from(&mut self, cx: &LayoutContext, row: usize) {
        for row in row..cx.rows() {
            let ranges = self.sub_ranges(cx, row);
            self.index.extend(ranges);
        }
        self.index.debug_check();
    }

    #[inline]
    fn range(&self, line: usize) -> Option<&SubRange> {
        self.index
            .get(line.min(self.index.len().saturating_sub(1)))
    }
}

impl LineLayout for WrapLayout {
    fn line_size(&self, _cx: &LayoutContext) -> usize {
        self.index.len()
    }

    fn text(&self, cx: &LayoutContext, line: usize) -> Text {
        match self.index.get(line) {
            Some(r) => self
                .row_text_at(cx, r.row())
                .sub(r.from_index(), r.to_index()),
            None => Text::sentinel(cx.rows(), cx.metrics.line_height()),
        }
    }

    fn texts(&self, cx: &LayoutContext, start_line: usize, end_line: usize) -> Vec<Text> {
        let end = end_line.min(self.index.len());
        let start = start_line.min(end);
        let mut texts = Vec::with_capacity(end - start);
        let mut row_text: Option<Text> = None;
        for r in &self.index.as_slice()[start..end] {
            // Siblings share one measurement of their row
            if row_text.as_ref().map_or(true, |t| t.row() != r.row()) {
                row_text = Some(self.row_text_at(cx, r.row()));
            }
            if let Some(t) = &row_text {
                texts.push(t.sub(r.from_index(), r.to_index()));
            }
        }
        texts
    }

    fn row_to_first_line(&self, _cx: &LayoutContext, row: usize) -> usize {
        let row = row.min(self.index.row_count().saturating_sub(1));
        self.index.first_line_of(row)
    }

    fn row_to_last_line(&self, cx: &LayoutContext, row: usize) -> usize {
        let first = self.row_to_first_line(cx, row);
        match self.index.get(first) {
            Some(r) => first + r.sub_lines() - 1,
            None => first,
        }
    }

    fn line_to_row(&self, _cx: &LayoutContext, line: usize) -> usize {
        self.range(line).map_or(0, SubRange::row)
    }

    fn row_to_line(&self, cx: &LayoutContext, row: usize, col: usize) -> usize {
        let first = self.row_to_first_line(cx, row);
        let Some(head) = self.index.get(first) else {
            return first;
        };
        let siblings = &self.index.as_slice()[first..first + head.sub_lines()];
        siblings
            .iter()
            .position(|r| r.contains(head.row(), col))
            .map_or(first + head.sub_lines() - 1, |i| first + i)
    }

    fn chars_in_line(&self) -> usize {
        self.chars_in_line
    }

    fn set_chars_in_line(&mut self, cx: &LayoutContext, chars: usize) {
        if chars != self.chars_in_line {
            self.chars_in_line = chars;
            self.rebuild(cx);
        }
    }

    fn home_col_on_row(&self, _cx: &LayoutContext, line: usize) -> usize {
        self.range(line).map_or(0, SubRange::from_index)
    }

    fn refresh(&mut self, cx: &LayoutContext, line: usize) {
        let line = line.min(self.index.len());
        self.index.truncate(line);
        let resume = match self.index.last().copied() {
            None => 0,
            Some(last) if !last.is_last() => {
                // An edit earlier in the row can move its split points
                self.index.truncate(line - (last.sub_line() + 1));
                last.row()
            }
            Some(last) => last.row() + 1,
        };
        tracing::trace!(line, resume_row = resume, "wrap refresh");
        self.build_from(cx, resume);
    }

    fn refresh_at(&mut self, cx: &LayoutContext, start_row: usize, end_row: usize) {
        let indexed_rows = self.index.row_count();
        let rows = cx.rows();
        let delta = rows as isize - indexed_rows as isize;

        let start = start_row.min(indexed_rows);
        let old_end = end_row
            .max(start_row.saturating_add(1))
            .min(indexed_rows)
            .max(start);
        let new_end = old_end as isize + delta;
        if new_end < start as isize || new_end as usize > rows {
            // The edit reaches outside the given span; rebuild the suffix
            let line = self.index.first_line_of(start);
            self.refresh(cx, line);
            return;
        }
        let new_end = new_end as usize;

        let first = self.index.first_line_of(start);
        let last = self.index.first_line_of(old_end);
        let fresh: Vec<SubRange> = (start..new_end)
            .flat_map(|row| self.sub_ranges(cx, row))
            .collect();
        let after = first + fresh.len();
        self.index.splice(first..last, fresh);
        self.index.shift_rows(after, delta);
        self.index.debug_check();

        tracing::trace!(
            start_row = start,
            old_end,
            new_end,
            delta,
            lines = self.index.len(),
            "wrap refresh_at"
        );
    }

    fn loc(&self, cx: &LayoutContext, row: usize, col: usize, lines: Range<usize>) -> Option<Loc> {
        let first = self.index.first_line_of(row);
        let head = self.index.get(first)?;
        if head.row() != row {
            return None;
        }
        let end = (first + head.sub_lines()).min(lines.end);
        (first.max(lines.start)..end)
            .find(|&line| {
                self.index
                    .get(line)
                    .is_some_and(|r| r.contains(row, col))
            })
            .map(|line| Loc::new(self.x_on_layout(cx, line, col), self.y_on_layout(cx, line)))
    }
}
