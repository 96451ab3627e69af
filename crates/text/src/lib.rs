// Chunk: docs/chunks/text_measure - Measured text values for proportional layout

//! lite-layout-text: measured text values for the lite-layout engine.
//!
//! This crate holds everything the layout engine needs to know about text
//! without knowing anything about lines, wrapping or screens:
//!
//! - [`FontMetrics`]: the measurement capability (advance widths, line height,
//!   tab size, and a generation counter bumped on change)
//! - [`Content`]: row-addressed document access, implemented for string
//!   vectors and for the editable [`TextContent`]
//! - [`Text`]: a string with one advance per character, with pixel/index
//!   conversion for a single display line
//! - [`SubText`]: greedy splitting of a measured row into wrapped segments
//! - [`ColsText`]: column-aligned rendering of csv/tsv rows
//!
//! # Example
//!
//! ```
//! use lite_layout_text::{MonospaceMetrics, SubText, Text};
//!
//! let fm = MonospaceMetrics::new(10.0, 20.0);
//! let row = Text::of_row(0, "The quick brown fox", &fm);
//! let subs = SubText::split(&row, 100.0);
//!
//! assert_eq!(subs.len(), 2);
//! assert_eq!(subs[0].value(), "The quick ");
//! assert_eq!(subs[1].value(), "brown fox");
//! ```

mod cols_text;
mod content;
mod metrics;
mod row_text;
mod sub_text;
mod text;
mod types;

pub use cols_text::{split as split_cols, ColsText};
pub use content::{Content, TextContent};
pub use metrics::{FontMetrics, MonospaceMetrics};
pub use sub_text::SubText;
pub use text::Text;
pub use types::{DirtyRows, Loc, Position};
