// Chunk: docs/chunks/sub_line_index - Ordered index of wrapped segments
//!
//! The sub-line index behind the wrapped layout.
//!
//! Each wrapped display line is described by a [`SubRange`] record: the row it
//! belongs to, its position among that row's segments, and the character span
//! it covers. The records live in one `Vec` sorted by `(row, sub_line)`, so the
//! position of a record *is* its display line number.
//!
//! Invariants (checked with `debug_assert!` after every mutation):
//!
//! - records are sorted by `(row, sub_line)`, and rows are contiguous from 0
//! - each row has records `0..sub_lines`, all agreeing on `sub_lines`
//! - `from_index <= to_index`, and consecutive segments of a row abut

use std::ops::Range;

/// One wrapped display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRange {
    row: usize,
    sub_line: usize,
    sub_lines: usize,
    from_index: usize,
    to_index: usize,
}

impl SubRange {
    pub fn new(row: usize, sub_line: usize, sub_lines: usize, from_index: usize, to_index: usize) -> Self {
        Self {
            row,
            sub_line,
            sub_lines,
            from_index,
            to_index,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn sub_line(&self) -> usize {
        self.sub_line
    }

    #[inline]
    pub fn sub_lines(&self) -> usize {
        self.sub_lines
    }

    #[inline]
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    #[inline]
    pub fn to_index(&self) -> usize {
        self.to_index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.to_index - self.from_index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from_index == self.to_index
    }

    /// Returns true if this is the final segment of its row.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.sub_line + 1 == self.sub_lines
    }

    /// Returns true if a caret at (`row`, `col`) belongs on this segment.
    ///
    /// Column 0 of an empty row matches its single record, and a column equal
    /// to `to_index` only matches the row's final segment.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row == row
            && ((self.from_index <= col && col < self.to_index)
                || (col == 0 && self.from_index == 0 && self.to_index == 0)
                || (col == self.to_index && self.is_last()))
    }
}

// =============================================================================
// SubLineIndex
// =============================================================================

/// Sorted arena of [`SubRange`] records addressed by display line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubLineIndex {
    ranges: Vec<SubRange>,
}

impl SubLineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of display lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn get(&self, line: usize) -> Option<&SubRange> {
        self.ranges.get(line)
    }

    #[inline]
    pub fn last(&self) -> Option<&SubRange> {
        self.ranges.last()
    }

    pub fn as_slice(&self) -> &[SubRange] {
        &self.ranges
    }

    /// Number of rows the index covers.
    pub fn row_count(&self) -> usize {
        self.ranges.last().map_or(0, |r| r.row + 1)
    }

    /// First display line of `row`, or `len()` if `row` is past the end.
    ///
    /// Binary search over the `(row, sub_line)` ordering.
    pub fn first_line_of(&self, row: usize) -> usize {
        self.ranges.partition_point(|r| r.row < row)
    }

    /// Appends the records of one or more rows.
    pub fn extend(&mut self, ranges: impl IntoIterator<Item = SubRange>) {
        self.ranges.extend(ranges);
    }

    /// Drops every record from `line` onward.
    pub fn truncate(&mut self, line: usize) {
        self.ranges.truncate(line);
    }

    /// Replaces the records at `lines` with `ranges`.
    pub fn splice(&mut self, lines: Range<usize>, ranges: Vec<SubRange>) {
        let end = lines.end.min(self.ranges.len());
        let start = lines.start.min(end);
        self.ranges.splice(start..end, ranges);
    }

    /// Adds `delta` to the row of every record from `line` onward.
    pub fn shift_rows(&mut self, line: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        let from = line.min(self.ranges.len());
        for range in &mut self.ranges[from..] {
            debug_assert!(
                range.row as isize + delta >= 0,
                "row shift below zero at line {}",
                line
            );
            range.row = range.row.saturating_add_signed(delta);
        }
    }

    /// Asserts the structural invariants in debug builds.
    pub fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            let mut prev: Option<&SubRange> = None;
            for r in &self.ranges {
                debug_assert!(r.from_index <= r.to_index, "inverted span: {:?}", r);
                debug_assert!(r.sub_line < r.sub_lines, "sub_line out of range: {:?}", r);
                match prev {
                    None => debug_assert!(
                        r.row == 0 && r.sub_line == 0,
                        "index must start at row 0: {:?}",
                        r
                    ),
                    Some(p) if p.row == r.row => {
                        debug_assert!(
                            r.sub_line == p.sub_line + 1 && r.sub_lines == p.sub_lines,
                            "broken sibling run: {:?} then {:?}",
                            p,
                            r
                        );
                        debug_assert!(r.from_index == p.to_index, "gap between {:?} and {:?}", p, r);
                    }
                    Some(p) => {
                        debug_assert!(
                            p.is_last() && r.row == p.row + 1 && r.sub_line == 0 && r.from_index == 0,
                            "broken row order: {:?} then {:?}",
                            p,
                            r
                        );
                    }
                }
                prev = Some(r);
            }
        }
    }
}
