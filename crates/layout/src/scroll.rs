// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic
// Chunk: docs/chunks/screen_layout - Scroll bar extents and caret following
//!
//! Scroll arithmetic for the screen layout.
//!
//! This module is pure arithmetic with no knowledge of text or layouts. It
//! derives scroll bar extents from the viewport state and decides where the
//! top line must move to bring a line into view.

/// Extents of one scroll bar, in the units of its axis.
///
/// Vertical bars are measured in display lines, horizontal bars in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollBar {
    pub min: f32,
    pub max: f32,
    /// Current scroll position
    pub value: f32,
    /// Size of the thumb
    pub visible_amount: f32,
}

/// Both scroll bars of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollBars {
    pub vertical: ScrollBar,
    pub horizontal: ScrollBar,
}

/// Computes scroll bar extents.
///
/// # Arguments
/// * `line_size` - Total display lines
/// * `top_line` - First visible display line
/// * `screen_lines` - Display lines that fit on screen (rounded up)
/// * `x_max` - Widest display line seen, in pixels
/// * `x_shift` - Horizontal scroll offset, in pixels
/// * `screen_width` - Viewport width, in pixels
///
/// The horizontal range stops half a screen before `x_max`, so the end of the
/// widest line can be scrolled to the middle of the viewport but no further.
pub fn scroll_bars(
    line_size: usize,
    top_line: usize,
    screen_lines: usize,
    x_max: f32,
    x_shift: f32,
    screen_width: f32,
) -> ScrollBars {
    let vertical = ScrollBar {
        min: 0.0,
        max: line_size.saturating_sub(1) as f32,
        value: top_line as f32,
        visible_amount: screen_lines as f32,
    };

    let max = x_max - x_max.min(screen_width / 2.0);
    let visible_amount = if x_max > 0.0 {
        screen_width * max / x_max
    } else {
        0.0
    };
    let horizontal = ScrollBar {
        min: 0.0,
        max,
        value: x_shift,
        visible_amount,
    };

    ScrollBars {
        vertical,
        horizontal,
    }
}

/// Returns the top line that brings `line` into view, or `None` if it
/// already is.
///
/// `visible` is the number of fully visible lines; values below 1 are treated
/// as 1. Scrolling up puts `line` at the top, scrolling down puts it at the
/// bottom.
pub fn top_line_to_reveal(top_line: usize, line: usize, visible: usize) -> Option<usize> {
    let visible = visible.max(1);
    if line < top_line {
        Some(line)
    } else if line >= top_line + visible {
        Some(line + 1 - visible)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== scroll_bars ====================

    #[test]
    fn test_vertical_extents() {
        let bars = scroll_bars(100, 5, 20, 0.0, 0.0, 800.0);
        assert_eq!(bars.vertical.max, 99.0);
        assert_eq!(bars.vertical.value, 5.0);
        assert_eq!(bars.vertical.visible_amount, 20.0);
    }

    #[test]
    fn test_horizontal_extents() {
        let bars = scroll_bars(10, 0, 10, 1000.0, 30.0, 400.0);
        // 1000 - min(1000, 200)
        assert_eq!(bars.horizontal.max, 800.0);
        assert_eq!(bars.horizontal.value, 30.0);
        assert_eq!(bars.horizontal.visible_amount, 320.0);
    }

    #[test]
    fn test_narrow_content_has_no_horizontal_range() {
        let bars = scroll_bars(10, 0, 10, 100.0, 0.0, 400.0);
        assert_eq!(bars.horizontal.max, 0.0);
        assert_eq!(bars.horizontal.visible_amount, 0.0);
    }

    #[test]
    fn test_empty_content() {
        let bars = scroll_bars(0, 0, 10, 0.0, 0.0, 400.0);
        assert_eq!(bars.vertical.max, 0.0);
        assert_eq!(bars.horizontal.visible_amount, 0.0);
    }

    // ==================== top_line_to_reveal ====================

    #[test]
    fn test_reveal_already_visible() {
        assert_eq!(top_line_to_reveal(10, 10, 5), None);
        assert_eq!(top_line_to_reveal(10, 14, 5), None);
    }

    #[test]
    fn test_reveal_above() {
        assert_eq!(top_line_to_reveal(10, 3, 5), Some(3));
    }

    #[test]
    fn test_reveal_below() {
        assert_eq!(top_line_to_reveal(10, 15, 5), Some(11));
    }

    #[test]
    fn test_reveal_zero_visible() {
        assert_eq!(top_line_to_reveal(0, 4, 0), Some(4));
    }
}
