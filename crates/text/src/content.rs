// Chunk: docs/chunks/text_measure - Content capability and in-memory stores

//! Row-addressed document access.
//!
//! The layout reads documents through the [`Content`] trait only: the text of
//! one row at a time, plus the row count. Row strings may carry their `\n` or
//! `\r\n` terminator.
//!
//! [`TextContent`] is a small editable store that reports [`DirtyRows`] for
//! each mutation, which makes it convenient for driving incremental relayout.

use std::borrow::Cow;
use std::convert::Infallible;
use std::str::FromStr;

use crate::types::{DirtyRows, Position};

/// Read access to a document, one row at a time.
pub trait Content {
    /// Returns the text of `row`, or an empty string past the end.
    fn text(&self, row: usize) -> Cow<'_, str>;

    /// Returns the number of rows.
    fn rows(&self) -> usize;
}

impl Content for [String] {
    fn text(&self, row: usize) -> Cow<'_, str> {
        self.get(row).map_or(Cow::Borrowed(""), |s| Cow::Borrowed(s.as_str()))
    }

    fn rows(&self) -> usize {
        self.len()
    }
}

impl Content for Vec<String> {
    fn text(&self, row: usize) -> Cow<'_, str> {
        self.as_slice().text(row)
    }

    fn rows(&self) -> usize {
        self.len()
    }
}

impl Content for [&str] {
    fn text(&self, row: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(row).copied().unwrap_or(""))
    }

    fn rows(&self) -> usize {
        self.len()
    }
}

impl Content for Vec<&str> {
    fn text(&self, row: usize) -> Cow<'_, str> {
        self.as_slice().text(row)
    }

    fn rows(&self) -> usize {
        self.len()
    }
}

impl<C: Content + ?Sized> Content for &C {
    fn text(&self, row: usize) -> Cow<'_, str> {
        (**self).text(row)
    }

    fn rows(&self) -> usize {
        (**self).rows()
    }
}

// =============================================================================
// TextContent
// =============================================================================

/// An editable document backed by one `String` and a row-start index.
///
/// Rows are split after each `\n`, so `"a\nb"` has two rows (`"a\n"`, `"b"`)
/// and `"a\n"` has two rows (`"a\n"`, `""`). There is always at least one row.
#[derive(Debug, Clone, Default)]
pub struct TextContent {
    buf: String,
    index: RowIndex,
}

impl TextContent {
    /// Creates an empty document with a single empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document that owns `text`.
    pub fn with_text(text: String) -> Self {
        let mut index = RowIndex::default();
        index.rebuild(&text);
        Self { buf: text, index }
    }

    /// The whole document.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Number of characters on `row`, excluding its terminator.
    pub fn row_len(&self, row: usize) -> usize {
        let row_text = self.text(row);
        let text: &str = &row_text;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        text.chars().count()
    }

    /// Inserts `text` at `pos`, clamping the position into the document.
    ///
    /// # Returns
    /// `Single(row)` when no row break was inserted. Otherwise
    /// `Range { from: row, to: row + 1 }`: the one pre-edit row that was
    /// split into several.
    pub fn insert(&mut self, pos: Position, text: &str) -> DirtyRows {
        if text.is_empty() {
            return DirtyRows::None;
        }
        let pos = self.clamp(pos);
        let offset = self.byte_offset(pos);
        self.buf.insert_str(offset, text);

        for start in self.index.starts_after_mut(pos.row) {
            *start += text.len();
        }
        let new_starts: Vec<usize> = text
            .match_indices('\n')
            .map(|(i, _)| offset + i + 1)
            .collect();
        self.index.insert_starts_after(pos.row, &new_starts);

        if new_starts.is_empty() {
            DirtyRows::Single(pos.row)
        } else {
            DirtyRows::Range {
                from: pos.row,
                to: pos.row + 1,
            }
        }
    }

    /// Deletes the text between two positions (in either order), clamped.
    ///
    /// # Returns
    /// `None` for an empty range, `Single(row)` when the range is inside one
    /// row, and `Range` over the pre-edit rows that were joined into one
    /// otherwise.
    pub fn delete(&mut self, from: Position, to: Position) -> DirtyRows {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let from = self.clamp(from);
        let to = self.clamp_with_terminator(to);
        let start = self.byte_offset(from);
        let end = self.byte_offset(to);
        if start >= end {
            return DirtyRows::None;
        }
        let removed_rows = self.buf[start..end].matches('\n').count();
        let removed_len = end - start;
        self.buf.replace_range(start..end, "");

        self.index.remove_starts_after(from.row, removed_rows);
        for row_start in self.index.starts_after_mut(from.row) {
            *row_start -= removed_len;
        }

        if removed_rows == 0 {
            DirtyRows::Single(from.row)
        } else {
            DirtyRows::Range {
                from: from.row,
                to: from.row + removed_rows + 1,
            }
        }
    }

    fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.rows().saturating_sub(1));
        Position::new(row, pos.col.min(self.row_len(row)))
    }

    /// Like `clamp`, but a column past the end of a row selects its terminator.
    fn clamp_with_terminator(&self, pos: Position) -> Position {
        let row = pos.row.min(self.rows().saturating_sub(1));
        let len = self.text(row).chars().count();
        Position::new(row, pos.col.min(len))
    }

    fn byte_offset(&self, pos: Position) -> usize {
        let row_start = self.index.start(pos.row);
        let row = self.text(pos.row);
        let col = row
            .char_indices()
            .nth(pos.col)
            .map_or(row.len(), |(i, _)| i);
        row_start + col
    }
}

impl Content for TextContent {
    fn text(&self, row: usize) -> Cow<'_, str> {
        if row >= self.index.count() {
            return Cow::Borrowed("");
        }
        let start = self.index.start(row);
        let end = self.index.start_opt(row + 1).unwrap_or(self.buf.len());
        Cow::Borrowed(&self.buf[start..end])
    }

    fn rows(&self) -> usize {
        self.index.count()
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::with_text(text)
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::with_text(text.to_owned())
    }
}

impl FromStr for TextContent {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}

// =============================================================================
// RowIndex
// =============================================================================

/// Byte offsets where each row starts. `starts[0] == 0` always.
#[derive(Debug, Clone)]
struct RowIndex {
    starts: Vec<usize>,
}

impl Default for RowIndex {
    fn default() -> Self {
        Self { starts: vec![0] }
    }
}

impl RowIndex {
    fn rebuild(&mut self, text: &str) {
        self.starts.clear();
        self.starts.push(0);
        self.starts
            .extend(text.match_indices('\n').map(|(i, _)| i + 1));
    }

    fn count(&self) -> usize {
        self.starts.len()
    }

    fn start(&self, row: usize) -> usize {
        self.starts.get(row).copied().unwrap_or(0)
    }

    fn start_opt(&self, row: usize) -> Option<usize> {
        self.starts.get(row).copied()
    }

    /// Row starts strictly after `row`, for bulk shifting.
    fn starts_after_mut(&mut self, row: usize) -> &mut [usize] {
        let from = (row + 1).min(self.starts.len());
        &mut self.starts[from..]
    }

    /// Splices ascending `new_starts` in right after `row`.
    fn insert_starts_after(&mut self, row: usize, new_starts: &[usize]) {
        if new_starts.is_empty() {
            return;
        }
        let at = row + 1;
        let old_len = self.starts.len();
        let add = new_starts.len();
        self.starts.resize(old_len + add, 0);
        self.starts.copy_within(at..old_len, at + add);
        self.starts[at..at + add].copy_from_slice(new_starts);
    }

    /// Removes the `n` row starts following `row`.
    fn remove_starts_after(&mut self, row: usize, n: usize) {
        let from = (row + 1).min(self.starts.len());
        let to = (from + n).min(self.starts.len());
        self.starts.drain(from..to);
    }
}
