// Chunk: docs/chunks/sub_line_index - Greedy splitting of a row into wrapped segments

//! Splitting a measured row into display-line segments.
//!
//! The split is greedy: characters are packed into the current segment until
//! the next one would overflow the available width, at which point a new
//! segment begins at that character. Zero-advance characters (terminators,
//! combining marks) never start a segment, so a trailing `\n` always stays on
//! the last segment.

use crate::text::Text;

/// A `[from_index, to_index)` character span of a measured row.
#[derive(Debug, Clone, Copy)]
pub struct SubText<'a> {
    parent: &'a Text,
    from_index: usize,
    to_index: usize,
    width: f32,
}

impl<'a> SubText<'a> {
    /// Splits `parent` into segments no wider than `width` pixels.
    ///
    /// A non-positive `width` disables wrapping and yields the whole row as
    /// one segment. A single character wider than `width` gets a segment of its
    /// own rather than producing an empty one. An empty row yields exactly one
    /// empty segment.
    ///
    /// # Arguments
    /// * `parent` - The measured row
    /// * `width` - Available width in pixels
    ///
    /// # Returns
    /// At least one segment; the segments cover `parent` exactly once, in order.
    pub fn split(parent: &'a Text, width: f32) -> Vec<SubText<'a>> {
        if width <= 0.0 {
            return vec![SubText {
                parent,
                from_index: 0,
                to_index: parent.len(),
                width: parent.width(),
            }];
        }

        let mut subs = Vec::new();
        let mut w = 0.0;
        let mut from_index = 0;
        for (i, &advance) in parent.advances().iter().enumerate() {
            if advance <= 0.0 {
                continue;
            }
            if w + advance > width && i > from_index {
                subs.push(SubText {
                    parent,
                    from_index,
                    to_index: i,
                    width: w,
                });
                w = 0.0;
                from_index = i;
            }
            w += advance;
        }
        subs.push(SubText {
            parent,
            from_index,
            to_index: parent.len(),
            width: w,
        });
        subs
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.parent.row()
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
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The segment's characters.
    pub fn value(&self) -> &'a str {
        self.parent.slice(self.from_index, self.to_index)
    }

    /// Materializes the segment as a display line.
    pub fn to_text(&self) -> Text {
        self.parent.sub(self.from_index, self.to_index)
    }
}
