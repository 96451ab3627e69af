// Chunk: docs/chunks/text_measure - Measured text values for proportional layout

//! A measured run of text: the unit the layout hands to the renderer.
//!
//! A [`Text`] is a string plus one advance width per character. All indices
//! are character (Unicode scalar) indices relative to the start of the value;
//! [`Text::from_index`] records where the value starts within its row so that
//! wrapped segments can be mapped back to row columns.

use unicode_segmentation::UnicodeSegmentation;

/// One display line's worth of measured text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Row of the document this text belongs to
    row: usize,
    /// Column on the row where `value` starts (non-zero for wrapped continuations)
    from_index: usize,
    value: String,
    /// Advance width for each character of `value`
    advances: Vec<f32>,
    /// Sum of `advances`
    width: f32,
    height: f32,
}

impl Text {
    /// Creates a text from a value and its per-character advances.
    ///
    /// `advances` must hold exactly one entry per character of `value`.
    pub fn new(row: usize, from_index: usize, value: String, advances: Vec<f32>, height: f32) -> Self {
        debug_assert_eq!(
            value.chars().count(),
            advances.len(),
            "one advance per character"
        );
        let width = advances.iter().sum();
        Self {
            row,
            from_index,
            value,
            advances,
            width,
            height,
        }
    }

    /// Creates the empty trailing line placed one row past the end of a document.
    pub fn sentinel(row: usize, height: f32) -> Self {
        Self::new(row, 0, String::new(), Vec::new(), height)
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn advances(&self) -> &[f32] {
        &self.advances
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of characters, line terminator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.advances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Returns true if the value is terminated by `\n`.
    pub fn is_end_with_lf(&self) -> bool {
        self.value.ends_with('\n')
    }

    /// Returns true if the value is terminated by `\r\n`.
    pub fn is_end_with_crlf(&self) -> bool {
        self.value.ends_with("\r\n")
    }

    /// Number of characters excluding a trailing line terminator.
    pub fn text_length(&self) -> usize {
        let len = self.len();
        if self.is_end_with_crlf() {
            len - 2
        } else if self.is_end_with_lf() {
            len - 1
        } else {
            len
        }
    }

    /// Returns the index one character to the right of `index`.
    ///
    /// Returns `None` when moving right would step over the line terminator.
    /// At the very end of the value, `index` is returned unchanged.
    pub fn index_right(&self, index: usize) -> Option<usize> {
        if self.is_empty() || index >= self.len() {
            return Some(index.min(self.len()));
        }
        let next = index + 1;
        if next > self.text_length() {
            None
        } else {
            Some(next)
        }
    }

    /// Returns the index one character to the left of `index`, floored at 0.
    pub fn index_left(&self, index: usize) -> usize {
        index.min(self.len()).saturating_sub(1)
    }

    /// Width of the characters before `index`.
    pub fn width_to(&self, index: usize) -> f32 {
        self.advances[..index.min(self.len())].iter().sum()
    }

    /// Index of the character under the pixel offset `x`.
    ///
    /// Past the last character this is `text_length()`, so a caret never lands
    /// after the line terminator.
    pub fn index_to(&self, x: f32) -> usize {
        let mut w = 0.0;
        for (i, advance) in self.advances.iter().enumerate() {
            if w + advance > x {
                return i;
            }
            w += advance;
        }
        self.len().min(self.text_length())
    }

    /// Splits the value at word boundaries (UAX #29).
    ///
    /// Each piece keeps its own advances, and its `from_index` is its column on
    /// the row.
    pub fn words(&self) -> Vec<Text> {
        let mut col = 0;
        self.value
            .split_word_bounds()
            .map(|word| {
                let n = word.chars().count();
                let text = Text::new(
                    self.row,
                    self.from_index + col,
                    word.to_string(),
                    self.advances[col..col + n].to_vec(),
                    self.height,
                );
                col += n;
                text
            })
            .collect()
    }

    /// Returns the substring covering characters `[from, to)`, clamped.
    pub fn slice(&self, from: usize, to: usize) -> &str {
        let to = to.min(self.len());
        let from = from.min(to);
        &self.value[self.byte_offset(from)..self.byte_offset(to)]
    }

    /// Copies characters `[from, to)` into a new text, clamped.
    ///
    /// The copy's `from_index` is this text's `from_index` plus `from`.
    pub fn sub(&self, from: usize, to: usize) -> Text {
        let to = to.min(self.len());
        let from = from.min(to);
        Text::new(
            self.row,
            self.from_index + from,
            self.slice(from, to).to_string(),
            self.advances[from..to].to_vec(),
            self.height,
        )
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Text {
        let advances = value
            .chars()
            .map(|c| if c == '\n' || c == '\r' { 0.0 } else { 10.0 })
            .collect();
        Text::new(0, 0, value.to_string(), advances, 20.0)
    }

    // ==================== Terminators ====================

    #[test]
    fn test_text_length_excludes_lf() {
        let t = text("abc\n");
        assert!(t.is_end_with_lf());
        assert!(!t.is_end_with_crlf());
        assert_eq!(t.len(), 4);
        assert_eq!(t.text_length(), 3);
    }

    #[test]
    fn test_text_length_excludes_crlf() {
        let t = text("abc\r\n");
        assert!(t.is_end_with_crlf());
        assert_eq!(t.text_length(), 3);
    }

    #[test]
    fn test_text_length_without_terminator() {
        assert_eq!(text("abc").text_length(), 3);
        assert_eq!(text("").text_length(), 0);
    }

    // ==================== Pixel <-> index ====================

    #[test]
    fn test_width_to() {
        let t = text("abcd");
        assert_eq!(t.width_to(0), 0.0);
        assert_eq!(t.width_to(2), 20.0);
        assert_eq!(t.width_to(100), 40.0);
        assert_eq!(t.width(), 40.0);
    }

    #[test]
    fn test_index_to() {
        let t = text("abcd\n");
        assert_eq!(t.index_to(0.0), 0);
        assert_eq!(t.index_to(9.9), 0);
        assert_eq!(t.index_to(10.0), 1);
        assert_eq!(t.index_to(35.0), 3);
        // Past the end stops before the terminator
        assert_eq!(t.index_to(500.0), 4);
    }

    #[test]
    fn test_index_to_negative_x() {
        assert_eq!(text("abc").index_to(-5.0), 0);
    }

    // ==================== Caret movement ====================

    #[test]
    fn test_index_right_stops_at_terminator() {
        let t = text("ab\n");
        assert_eq!(t.index_right(0), Some(1));
        assert_eq!(t.index_right(1), Some(2));
        assert_eq!(t.index_right(2), None);
    }

    #[test]
    fn test_index_right_at_end() {
        let t = text("ab");
        assert_eq!(t.index_right(2), Some(2));
        assert_eq!(text("").index_right(0), Some(0));
    }

    #[test]
    fn test_index_left() {
        let t = text("ab");
        assert_eq!(t.index_left(0), 0);
        assert_eq!(t.index_left(2), 1);
    }

    // ==================== Words ====================

    #[test]
    fn test_words_split_and_keep_advances() {
        let t = text("hello, world");
        let words = t.words();
        let values: Vec<&str> = words.iter().map(|w| w.value()).collect();
        assert_eq!(values, vec!["hello", ",", " ", "world"]);
        assert_eq!(words[3].from_index(), 7);
        assert_eq!(words[3].width(), 50.0);
    }

    #[test]
    fn test_slice_multibyte() {
        let t = Text::new(0, 0, "aé日b".to_string(), vec![1.0; 4], 1.0);
        assert_eq!(t.slice(1, 3), "é日");
        assert_eq!(t.slice(3, 99), "b");
        assert_eq!(t.slice(5, 2), "");
    }

    #[test]
    fn test_sub_offsets_from_index() {
        let t = text("abcdef");
        let s = t.sub(2, 4);
        assert_eq!(s.value(), "cd");
        assert_eq!(s.from_index(), 2);
        assert_eq!(s.width(), 20.0);
        let s = s.sub(1, 9);
        assert_eq!(s.value(), "d");
        assert_eq!(s.from_index(), 3);
    }

    #[test]
    fn test_sentinel_is_empty() {
        let s = Text::sentinel(7, 16.0);
        assert!(s.is_empty());
        assert_eq!(s.row(), 7);
        assert_eq!(s.height(), 16.0);
    }
}
