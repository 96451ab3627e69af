// Chunk: docs/chunks/text_measure - Row measurement with tab expansion

//! Measuring a whole document row.

use crate::metrics::FontMetrics;
use crate::text::Text;

impl Text {
    /// Measures a document row, expanding tabs to the next tab stop.
    ///
    /// A tab advances to the next multiple of `tab_size` columns, each column
    /// being `standard_char_width` wide. Control characters (including line
    /// terminators) are given a zero advance.
    pub fn of_row(row: usize, value: impl Into<String>, metrics: &dyn FontMetrics) -> Text {
        measure(row, value.into(), metrics, true)
    }

    /// Measures a document row without tab expansion.
    ///
    /// Used for tabular rows where the separator advances are rewritten later.
    pub fn of_row_raw(row: usize, value: impl Into<String>, metrics: &dyn FontMetrics) -> Text {
        measure(row, value.into(), metrics, false)
    }
}

fn measure(row: usize, value: String, metrics: &dyn FontMetrics, expand_tabs: bool) -> Text {
    let tab_size = metrics.tab_size().max(1);
    let std_width = metrics.standard_char_width();

    let mut advances = Vec::with_capacity(value.len());
    let mut column = 0usize;
    for ch in value.chars() {
        let advance = if expand_tabs && ch == '\t' {
            let spaces = tab_size - (column % tab_size);
            column += spaces;
            std_width * spaces as f32
        } else if ch.is_control() {
            column += 1;
            0.0
        } else {
            column += 1;
            metrics.advance(ch)
        };
        advances.push(advance);
    }

    Text::new(row, 0, value, advances, metrics.line_height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    fn fm() -> MonospaceMetrics {
        MonospaceMetrics::new(10.0, 20.0).with_tab_size(4)
    }

    #[test]
    fn test_plain_row() {
        let t = Text::of_row(3, "abc", &fm());
        assert_eq!(t.row(), 3);
        assert_eq!(t.from_index(), 0);
        assert_eq!(t.advances(), &[10.0, 10.0, 10.0]);
        assert_eq!(t.height(), 20.0);
    }

    #[test]
    fn test_leading_tab_is_full_stop() {
        let t = Text::of_row(0, "\tx", &fm());
        assert_eq!(t.advances(), &[40.0, 10.0]);
    }

    #[test]
    fn test_tab_advances_to_next_stop() {
        // "ab" occupies two columns, the tab fills the remaining two
        let t = Text::of_row(0, "ab\tc", &fm());
        assert_eq!(t.advances(), &[10.0, 10.0, 20.0, 10.0]);
        // A second tab right after a stop takes a full stop again
        let t = Text::of_row(0, "abcd\te", &fm());
        assert_eq!(t.advances()[4], 40.0);
    }

    #[test]
    fn test_raw_row_keeps_tab_unmeasured() {
        let t = Text::of_row_raw(0, "a\tb", &fm());
        assert_eq!(t.advances(), &[10.0, 0.0, 10.0]);
    }

    #[test]
    fn test_terminator_has_no_width() {
        let t = Text::of_row(0, "ab\r\n", &fm());
        assert_eq!(t.width(), 20.0);
        assert_eq!(t.text_length(), 2);
    }

    #[test]
    fn test_supplementary_plane_is_one_column() {
        let t = Text::of_row(0, "a😀b", &fm());
        assert_eq!(t.len(), 3);
        assert_eq!(t.advances()[1], 20.0);
    }
}
