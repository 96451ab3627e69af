// Chunk: docs/chunks/screen_layout - Line layout and viewport engine
//!
//! lite-layout: maps document rows onto display lines and display lines onto
//! a scrollable screen.
//!
//! # Architecture
//!
//! ```text
//! Content (rows) ──► LineLayout (Plain | Wrapped | Tabular) ──► ScreenLayout (window)
//!                         ▲                                         │
//!                         └──────── FontMetrics (shared) ◄──────────┘
//! ```
//!
//! - [`LineLayout`] is the row↔line contract. [`Layout`] selects a strategy
//!   at runtime.
//! - [`WrapLayout`] keeps a [`SubLineIndex`] so that every mapping is a binary
//!   search, and patches it incrementally after edits.
//! - [`ScreenLayout`] owns the content and the active layout, keeps the
//!   visible display lines materialized, and answers the coordinate queries a
//!   renderer needs.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use lite_layout::{LayoutMode, ScreenLayout};
//! use lite_layout_text::MonospaceMetrics;
//!
//! let content = vec!["The quick brown fox".to_string(), "jumps".to_string()];
//! let mut screen = ScreenLayout::new(content, Rc::new(MonospaceMetrics::new(10.0, 20.0)));
//! screen.set_screen_size(100.0, 60.0);
//!
//! screen.toggle_layout("");
//! assert_eq!(screen.mode(), LayoutMode::Wrapped);
//!
//! let lines: Vec<&str> = screen.texts().iter().map(|t| t.value()).collect();
//! assert_eq!(lines, vec!["The quick ", "brown fox", "jumps"]);
//! ```

mod config;
mod context;
mod error;
mod gutter;
mod line_layout;
mod plain_layout;
mod screen_layout;
mod scroll;
mod sub_range;
mod tabular_layout;
mod wrap_layout;

pub use config::{
    LayoutConfig, DEFAULT_TABULAR_MARGIN_CHARS, DEFAULT_TABULAR_SAMPLE_ROWS, DEFAULT_WRAP_ROW_LIMIT,
};
pub use context::LayoutContext;
pub use error::ConfigError;
pub use gutter::line_numbers;
pub use line_layout::{Layout, LayoutMode, LineLayout};
pub use plain_layout::PlainLayout;
pub use screen_layout::ScreenLayout;
pub use scroll::{scroll_bars, top_line_to_reveal, ScrollBar, ScrollBars};
pub use sub_range::{SubLineIndex, SubRange};
pub use tabular_layout::TabularLayout;
pub use wrap_layout::WrapLayout;
