// Chunk: docs/chunks/wrap_layout - Identity layout for unwrapped documents

//! One display line per row.
//!
//! The plain layout keeps no state at all: line `n` is row `n`, and every
//! query is answered by fetching and measuring that row on demand.

use std::ops::Range;

use lite_layout_text::{Loc, Text};

use crate::context::LayoutContext;
use crate::line_layout::LineLayout;

/// Identity mapping between rows and display lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainLayout;

impl PlainLayout {
    #[inline]
    fn clamp_row(cx: &LayoutContext, row: usize) -> usize {
        row.min(cx.rows().saturating_sub(1))
    }
}

impl LineLayout for PlainLayout {
    fn line_size(&self, cx: &LayoutContext) -> usize {
        cx.rows()
    }

    fn text(&self, cx: &LayoutContext, line: usize) -> Text {
        if line >= cx.rows() {
            return Text::sentinel(cx.rows(), cx.metrics.line_height());
        }
        self.row_text_at(cx, line)
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

    fn refresh(&mut self, _cx: &LayoutContext, _line: usize) {}

    fn refresh_at(&mut self, _cx: &LayoutContext, _start_row: usize, _end_row: usize) {}

    fn loc(&self, cx: &LayoutContext, row: usize, col: usize, lines: Range<usize>) -> Option<Loc> {
        if lines.contains(&row) && row < cx.rows() {
            Some(Loc::new(self.x_on_layout(cx, row, col), self.y_on_layout(cx, row)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lite_layout_text::MonospaceMetrics;

    fn rows() -> Vec<String> {
        vec!["abc\n".to_string(), "\tx\n".to_string(), "z".to_string()]
    }

    #[test]
    fn test_identity_mapping() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0);
        let cx = LayoutContext::new(&content, &fm);
        let layout = PlainLayout;

        assert_eq!(layout.line_size(&cx), 3);
        for row in 0..3 {
            assert_eq!(layout.row_to_first_line(&cx, row), row);
            assert_eq!(layout.row_to_last_line(&cx, row), row);
            assert_eq!(layout.line_to_row(&cx, row), row);
            assert_eq!(layout.row_to_line(&cx, row, 99), row);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0);
        let cx = LayoutContext::new(&content, &fm);
        let layout = PlainLayout;

        assert_eq!(layout.row_to_first_line(&cx, 100), 2);
        assert_eq!(layout.line_to_row(&cx, 100), 2);
    }

    #[test]
    fn test_sentinel_past_end() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0);
        let cx = LayoutContext::new(&content, &fm);

        let sentinel = PlainLayout.text(&cx, 3);
        assert!(sentinel.is_empty());
        assert_eq!(sentinel.row(), 3);
    }

    #[test]
    fn test_columns_and_pixels() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0).with_tab_size(4);
        let cx = LayoutContext::new(&content, &fm);
        let layout = PlainLayout;

        assert_eq!(layout.end_col_on_row(&cx, 0), 3);
        assert_eq!(layout.x_on_layout(&cx, 1, 1), 40.0);
        assert_eq!(layout.x_to_col(&cx, 1, 45.0), 1);
        assert_eq!(layout.x_to_col(&cx, 0, 500.0), 3);
        assert_eq!(layout.x_to_mid_col(&cx, 0, 6.0), 1);
        assert_eq!(layout.y_on_layout(&cx, 2), 40.0);
    }

    #[test]
    fn test_loc_bounded_to_lines() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0);
        let cx = LayoutContext::new(&content, &fm);
        let layout = PlainLayout;

        assert_eq!(layout.loc(&cx, 1, 0, 1..3), Some(Loc::new(0.0, 20.0)));
        assert_eq!(layout.loc(&cx, 0, 0, 1..3), None);
    }

    #[test]
    fn test_texts_clamped_without_sentinel() {
        let content = rows();
        let fm = MonospaceMetrics::new(10.0, 20.0);
        let cx = LayoutContext::new(&content, &fm);

        let texts = PlainLayout.texts(&cx, 1, 10);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].row(), 1);
        assert_eq!(texts[1].value(), "z");
    }
}
