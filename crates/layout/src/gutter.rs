// Chunk: docs/chunks/screen_layout - Line number gutter

//! Line numbers for the gutter beside the text area.

use lite_layout_text::Text;

/// Projects a viewport window onto gutter labels.
///
/// The first display line of each row is labelled with its 1-based row
/// number. Continuation lines of a wrapped row (those not starting at column
/// 0, including one at the top of the window) get an empty label of the same
/// height so the gutter stays aligned with the text. Labelling stops at the
/// first line whose row is past `row_size`.
pub fn line_numbers(window: &[Text], row_size: usize, char_width: f32) -> Vec<Text> {
    let mut labels = Vec::with_capacity(window.len());
    for text in window {
        if text.row() >= row_size {
            break;
        }
        if text.from_index() > 0 {
            labels.push(Text::new(text.row(), 0, String::new(), Vec::new(), text.height()));
        } else {
            let num = (text.row() + 1).to_string();
            let advances = vec![char_width; num.len()];
            labels.push(Text::new(text.row(), 0, num, advances, text.height()));
        }
    }
    labels
}
