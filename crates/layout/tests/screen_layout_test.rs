// Chunk: docs/chunks/screen_layout - Integration tests for the viewport
//!
//! Integration tests for `ScreenLayout`: scrolling, mode switching and
//! relayout after edits made through the owned document.

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;

use lite_layout::{LayoutMode, ScreenLayout};
use lite_layout_text::{Content, DirtyRows, MonospaceMetrics, Position, Text, TextContent};

fn metrics() -> Rc<MonospaceMetrics> {
    Rc::new(MonospaceMetrics::new(10.0, 20.0))
}

fn numbered(n: usize) -> TextContent {
    let text: Vec<String> = (0..n).map(|i| format!("row {}", i)).collect();
    TextContent::from(text.join("\n"))
}

fn window(screen: &ScreenLayout<TextContent>) -> Vec<(usize, usize, String)> {
    screen
        .texts()
        .iter()
        .map(|t| (t.row(), t.from_index(), t.value().to_string()))
        .collect()
}

/// A document that counts how many rows the layout reads.
struct CountingContent {
    doc: TextContent,
    reads: Cell<usize>,
}

impl Content for CountingContent {
    fn text(&self, row: usize) -> Cow<'_, str> {
        self.reads.set(self.reads.get() + 1);
        self.doc.text(row)
    }

    fn rows(&self) -> usize {
        self.doc.rows()
    }
}

// =============================================================================
// Scrolling
// =============================================================================

#[test]
fn test_scroll_next_from_top() {
    let mut screen = ScreenLayout::new(numbered(100), metrics());
    screen.set_screen_size(800.0, 400.0);
    assert_eq!(screen.screen_line_size(), 20);

    screen.scroll_next(5);
    assert_eq!(screen.top_line(), 5);
    let rows: Vec<usize> = screen.texts().iter().map(Text::row).collect();
    assert_eq!(rows, (5..=24).collect::<Vec<_>>());
}

#[test]
fn test_repeated_scroll_matches_jump() {
    let long = "word ".repeat(30);
    let text: Vec<String> = (0..60)
        .map(|i| if i % 3 == 0 { long.clone() } else { format!("row {}", i) })
        .collect();
    let content = TextContent::from(text.join("\n"));

    let mut stepped = ScreenLayout::new(content.clone(), metrics());
    stepped.set_screen_size(200.0, 200.0);
    stepped.toggle_layout("");
    let mut jumped = ScreenLayout::new(content, metrics());
    jumped.set_screen_size(200.0, 200.0);
    jumped.toggle_layout("");

    for target in 1..40 {
        stepped.scroll_next(1);
        assert_eq!(stepped.top_line(), target);
        let expected: Vec<Text> = (target..target + 10).map(|line| stepped.text(line)).collect();
        assert_eq!(stepped.texts(), &expected[..], "top line {}", target);

        // Bounce far away so the jump back refetches the whole window
        jumped.scroll_at(target + 100);
        jumped.scroll_at(target);
        assert_eq!(window(&stepped), window(&jumped), "top line {}", target);
    }

    for _ in 0..40 {
        stepped.scroll_prev(1);
    }
    assert_eq!(stepped.top_line(), 0);
    jumped.scroll_at(0);
    assert_eq!(window(&stepped), window(&jumped));
}

#[test]
fn test_scroll_at_current_top_is_noop() {
    let mut screen = ScreenLayout::new(numbered(50), metrics());
    screen.set_screen_size(800.0, 200.0);
    screen.scroll_at(12);
    let before = window(&screen);
    screen.scroll_at(screen.top_line());
    assert_eq!(window(&screen), before);
}

// =============================================================================
// Mode switching
// =============================================================================

#[test]
fn test_plain_wrapped_plain_restores_identity() {
    let text = "The quick brown fox\njumps over the lazy dog\nend";
    let mut screen = ScreenLayout::new(TextContent::from(text), metrics());
    screen.set_screen_size(100.0, 200.0);

    screen.toggle_layout("");
    assert_eq!(screen.mode(), LayoutMode::Wrapped);
    assert_eq!(screen.line_size(), 6);
    assert_eq!(screen.line_to_row(1), 0);
    assert_eq!(screen.texts()[1].value(), "brown fox\n");

    screen.toggle_layout("");
    assert_eq!(screen.mode(), LayoutMode::Plain);
    assert_eq!(screen.line_size(), 3);
    for row in 0..3 {
        assert_eq!(screen.row_to_first_line(row), row);
        assert_eq!(screen.row_to_last_line(row), row);
        assert_eq!(screen.line_to_row(row), row);
    }
}

#[test]
fn test_toggle_keeps_top_row() {
    let long = "x".repeat(35);
    let text: Vec<String> = (0..20).map(|_| long.clone()).collect();
    let mut screen = ScreenLayout::new(TextContent::from(text.join("\n")), metrics());
    screen.set_screen_size(100.0, 100.0);
    screen.scroll_at(7);

    // Every row wraps into 4 segments
    screen.toggle_layout("");
    assert_eq!(screen.top_line(), 28);
    assert_eq!(screen.texts()[0].row(), 7);

    screen.toggle_layout("");
    assert_eq!(screen.top_line(), 7);
}

#[test]
fn test_sentinel_past_end() {
    let text = "The quick brown fox\nend";
    let mut screen = ScreenLayout::new(TextContent::from(text), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.toggle_layout("");

    let sentinel = screen.text(screen.line_size());
    assert!(sentinel.is_empty());
    assert_eq!(sentinel.row(), 2);
}

#[test]
fn test_tabular_aligns_columns() {
    let text = "id\tname\n1\tapple\n22\tkiwi";
    let mut screen = ScreenLayout::new(TextContent::from(text), metrics());
    screen.set_screen_size(400.0, 200.0);
    screen.toggle_layout("tsv");
    assert_eq!(screen.mode(), LayoutMode::Tabular('\t'));

    // Column 0 is 2 chars wide plus a 2 char margin
    for row in 0..3 {
        let sep = screen.content().text(row).find('\t').unwrap_or(0);
        assert_eq!(screen.x_on_layout(row, sep + 1), 40.0, "row {}", row);
    }
}

// =============================================================================
// Edits
// =============================================================================

#[test]
fn test_edit_inline_relayouts_row() {
    let mut screen = ScreenLayout::new(numbered(10), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.wrap_with(10);
    assert_eq!(screen.line_size(), 10);

    let dirty = screen.edit(|c| c.insert(Position::new(3, 0), "a long prefix "));
    assert_eq!(dirty, DirtyRows::Single(3));
    // "a long prefix row 3" needs two lines
    assert_eq!(screen.line_size(), 11);
    assert_eq!(screen.row_to_first_line(4), 5);
}

#[test]
fn test_edit_with_newlines_relayouts_tail() {
    let mut screen = ScreenLayout::new(numbered(10), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.wrap_with(10);

    let dirty = screen.edit(|c| c.insert(Position::new(2, 5), "\nsplit\n"));
    assert_eq!(dirty, DirtyRows::Range { from: 2, to: 3 });
    assert_eq!(screen.row_size(), 12);
    assert_eq!(screen.line_size(), 12);
    assert_eq!(screen.line_to_row(11), 11);

    let dirty = screen.edit(|c| c.delete(Position::new(2, 5), Position::new(4, 0)));
    assert_eq!(dirty, DirtyRows::Range { from: 2, to: 5 });
    assert_eq!(screen.row_size(), 10);
    let values: Vec<String> = screen.texts().iter().map(|t| t.value().to_string()).collect();
    assert_eq!(values[2], "row 2\n");
}

#[test]
fn test_row_breaks_relayout_only_touched_rows() {
    let text: Vec<String> = (0..10_000)
        .map(|i| format!("row {} {}", i, "word ".repeat(i % 5)))
        .collect();
    let doc = CountingContent {
        doc: TextContent::from(text.join("\n")),
        reads: Cell::new(0),
    };
    let mut screen = ScreenLayout::new(doc, metrics());
    screen.set_screen_size(200.0, 200.0);
    screen.wrap_with(20);
    let top = screen.row_to_first_line(100);
    screen.scroll_at(top);
    let lines = screen.line_size();

    screen.content().reads.set(0);
    let dirty = screen.edit(|c| c.doc.insert(Position::new(100, 3), "\n"));
    assert_eq!(dirty, DirtyRows::Range { from: 100, to: 101 });
    assert!(
        screen.content().reads.get() < 50,
        "splitting a row read {} rows",
        screen.content().reads.get()
    );
    assert_eq!(screen.row_size(), 10_001);
    assert_eq!(screen.line_size(), lines + 1);
    assert_eq!(screen.text(top).value(), "row\n");

    screen.content().reads.set(0);
    let dirty = screen.edit(|c| c.doc.delete(Position::new(100, 3), Position::new(101, 0)));
    assert_eq!(dirty, DirtyRows::Range { from: 100, to: 102 });
    assert!(
        screen.content().reads.get() < 50,
        "joining rows read {} rows",
        screen.content().reads.get()
    );
    assert_eq!(screen.line_size(), lines);
    assert_eq!(screen.text(top).value(), "row 100 \n");
}

#[test]
fn test_out_of_range_dirty_rows_are_clamped() {
    let mut screen = ScreenLayout::new(numbered(10), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.wrap_with(10);
    screen.scroll_at(5);
    let before = window(&screen);

    screen.apply_dirty(DirtyRows::Single(usize::MAX));
    screen.apply_dirty(DirtyRows::Range {
        from: usize::MAX,
        to: usize::MAX,
    });
    screen.apply_dirty(DirtyRows::FromRowToEnd(usize::MAX));
    screen.refresh_buffer(usize::MAX, usize::MAX);

    assert_eq!(screen.line_size(), 10);
    assert_eq!(window(&screen), before);
    assert_eq!(screen.y_to_line_on_screen(f32::MAX), 9);
}

#[test]
fn test_content_mut_then_refresh_buffer() {
    let mut screen = ScreenLayout::new(numbered(5), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.wrap_with(10);

    screen.content_mut().insert(Position::new(0, 5), "0000000000");
    // Not yet observed by the layout
    assert_eq!(screen.line_size(), 5);

    screen.refresh_buffer(0, 1);
    assert_eq!(screen.line_size(), 6);
    assert_eq!(screen.texts()[1].value(), "00000\n");
}

#[test]
fn test_gutter_blank_for_continuations() {
    let text = "The quick brown fox\nend";
    let mut screen = ScreenLayout::new(TextContent::from(text), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.toggle_layout("");

    let labels: Vec<String> = screen
        .line_numbers()
        .iter()
        .map(|t| t.value().to_string())
        .collect();
    assert_eq!(labels, vec!["1", "", "2"]);
}

#[test]
fn test_gutter_blank_when_window_starts_mid_row() {
    let text = "The quick brown fox\nend";
    let mut screen = ScreenLayout::new(TextContent::from(text), metrics());
    screen.set_screen_size(100.0, 200.0);
    screen.toggle_layout("");
    screen.scroll_at(1);
    assert_eq!(screen.texts()[0].value(), "brown fox\n");

    let labels: Vec<String> = screen
        .line_numbers()
        .iter()
        .map(|t| t.value().to_string())
        .collect();
    assert_eq!(labels, vec!["", "2"]);
}
