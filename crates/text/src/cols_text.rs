// Chunk: docs/chunks/tabular_layout - Column-aligned rows for csv/tsv documents

//! Column-aligned rendering of delimiter-separated rows.
//!
//! A [`ColsText`] measures a row without tab expansion, splits it into columns
//! on a separator (double-quoted fields may contain the separator, and `""`
//! inside quotes is an escaped quote), and records each column's natural
//! width. [`ColsText::fix_cols`] then rewrites the advance of every separator
//! so that the next column starts at a shared x position across rows.

use crate::metrics::FontMetrics;
use crate::text::Text;

/// A delimiter-separated row whose separators can be widened to align columns.
#[derive(Debug, Clone)]
pub struct ColsText {
    text: Text,
    advances: Vec<f32>,
    /// Natural width of each column
    raw_widths: Vec<f32>,
    /// Character count of each column, separators excluded
    col_lengths: Vec<usize>,
    /// Extra space placed after every column
    margin: f32,
}

impl ColsText {
    /// Measures `value` and splits it into columns on `separator`.
    ///
    /// # Arguments
    /// * `row` - Row of the document
    /// * `value` - The row's text
    /// * `metrics` - Font metrics used for measurement
    /// * `separator` - Column separator, e.g. `,` or `\t`
    /// * `margin` - Space in pixels added after each aligned column
    pub fn new(
        row: usize,
        value: impl Into<String>,
        metrics: &dyn FontMetrics,
        separator: char,
        margin: f32,
    ) -> Self {
        let text = Text::of_row_raw(row, value, metrics);
        let col_lengths: Vec<usize> = split(text.value(), separator)
            .iter()
            .map(|col| col.chars().count())
            .collect();

        let mut raw_widths = Vec::with_capacity(col_lengths.len());
        let mut offset = 0;
        for &len in &col_lengths {
            let to = (offset + len).min(text.len());
            raw_widths.push(text.advances()[offset.min(to)..to].iter().sum());
            offset = to + 1;
        }

        Self {
            advances: text.advances().to_vec(),
            text,
            raw_widths,
            col_lengths,
            margin,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.text.row()
    }

    /// Natural width of each column.
    pub fn raw_widths(&self) -> &[f32] {
        &self.raw_widths
    }

    /// Number of columns on this row.
    pub fn col_count(&self) -> usize {
        self.col_lengths.len()
    }

    /// Current width of the row, separators included.
    pub fn width(&self) -> f32 {
        self.advances.iter().sum()
    }

    /// Widens each separator so column `i` occupies `col_widths[i]` plus margin.
    ///
    /// Columns beyond `col_widths` and a row's last column are left as is.
    pub fn fix_cols(&mut self, col_widths: &[f32]) {
        if self.advances.is_empty() {
            return;
        }
        let mut offset = 0;
        for (i, (&len, &raw)) in self.col_lengths.iter().zip(&self.raw_widths).enumerate() {
            let Some(&target) = col_widths.get(i) else {
                break;
            };
            offset += len;
            if offset >= self.advances.len() {
                break;
            }
            self.advances[offset] = (target - raw).max(0.0) + self.margin;
            offset += 1;
        }
    }

    /// Converts into a display line with the aligned advances.
    pub fn into_text(self) -> Text {
        let Self { text, advances, .. } = self;
        Text::new(
            text.row(),
            text.from_index(),
            text.value().to_string(),
            advances,
            text.height(),
        )
    }
}

/// Splits a row on `separator`, leaving separators inside double quotes alone.
pub fn split(value: &str, separator: char) -> Vec<&str> {
    if value.is_empty() {
        return vec![value];
    }
    let mut result = Vec::new();
    let mut in_quotes = false;
    let mut begin = 0;
    let mut chars = value.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !in_quotes && c == separator {
            result.push(&value[begin..i]);
            begin = i + c.len_utf8();
            continue;
        }
        if c == '"' {
            if in_quotes {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        }
    }
    result.push(&value[begin..]);
    result
}
