// Chunk: docs/chunks/text_measure - Document coordinates and dirty row reporting

use std::cmp::Ordering;

/// Position in the document as (row, column) where both are 0-indexed.
///
/// The column counts Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// A pixel location. `y` is the top of the display line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Loc {
    pub x: f32,
    pub y: f32,
}

impl Loc {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which rows of a document were touched by a mutation.
///
/// Produced by the content stores and consumed by the screen layout to pick
/// the cheapest relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyRows {
    /// Nothing changed.
    None,
    /// One row changed in place; the row count is unchanged.
    Single(usize),
    /// Rows `[from, to)`, numbered as before the edit, were replaced. The
    /// row count may have changed; the new count comes from the content.
    Range { from: usize, to: usize },
    /// Everything from a row to the end of the document changed.
    FromRowToEnd(usize),
}
