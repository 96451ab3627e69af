// Subsystem: docs/subsystems/viewport_scroll - Viewport mapping & scroll arithmetic
// Chunk: docs/chunks/screen_layout - Viewport window over a line layout
//!
//! The screen layout: a scrollable window of display lines.
//!
//! `ScreenLayout` owns a document, shares the font metrics, and wraps one
//! [`Layout`] strategy. It keeps the display lines currently on screen
//! materialized as [`Text`] values, starting at `top_line`.
//!
//! # Window maintenance
//!
//! - A scroll by less than one screenful shifts the window: lines leaving the
//!   screen are dropped and only the lines entering it are fetched.
//! - Anything else (larger jumps, resizes, refreshes, mode switches, font
//!   changes) refetches the whole window.
//!
//! Both paths produce the same window for the same `top_line`.
//!
//! # Font changes
//!
//! Metrics are shared through an `Rc` and carry a generation counter. Every
//! mutating operation first compares the generation against the one the layout
//! was built with and relays out the document if it moved.

use std::rc::Rc;

use lite_layout_text::{Content, DirtyRows, FontMetrics, Loc, Text};

use crate::config::LayoutConfig;
use crate::context::LayoutContext;
use crate::gutter;
use crate::line_layout::{Layout, LayoutMode, LineLayout};
use crate::plain_layout::PlainLayout;
use crate::scroll::{self, ScrollBars};
use crate::tabular_layout::TabularLayout;
use crate::wrap_layout::WrapLayout;

/// Borrows the content and metrics of a `ScreenLayout` as a `LayoutContext`.
///
/// A macro rather than a method so that `self.layout` can still be borrowed
/// mutably alongside it.
macro_rules! cx {
    ($self:ident) => {
        LayoutContext::new(&$self.content, &*$self.metrics)
    };
}

/// A viewport over a laid-out document.
pub struct ScreenLayout<C: Content> {
    content: C,
    metrics: Rc<dyn FontMetrics>,
    /// Metrics generation the current layout was built with
    generation: u64,
    config: LayoutConfig,
    layout: Layout,

    screen_width: f32,
    screen_height: f32,
    /// First display line in the window
    top_line: usize,
    /// Horizontal scroll offset in pixels
    x_shift: f32,
    /// Widest display line seen in the window, in pixels
    x_max: f32,
    /// Display lines `[top_line, top_line + window.len())`
    window: Vec<Text>,
}

impl<C: Content> ScreenLayout<C> {
    /// Creates a plain (unwrapped) screen layout with the default configuration.
    ///
    /// The window stays empty until [`set_screen_size`](Self::set_screen_size)
    /// is called.
    pub fn new(content: C, metrics: Rc<dyn FontMetrics>) -> Self {
        Self::with_config(content, metrics, LayoutConfig::default())
    }

    /// Creates a plain screen layout with the given configuration.
    pub fn with_config(content: C, metrics: Rc<dyn FontMetrics>, config: LayoutConfig) -> Self {
        let generation = metrics.generation();
        Self {
            content,
            metrics,
            generation,
            config,
            layout: Layout::Plain(PlainLayout),
            screen_width: 0.0,
            screen_height: 0.0,
            top_line: 0,
            x_shift: 0.0,
            x_max: 0.0,
            window: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the document.
    ///
    /// The layout does not observe edits made through this reference; follow
    /// them with [`apply_dirty`](Self::apply_dirty),
    /// [`refresh_buffer`](Self::refresh_buffer) or [`refresh`](Self::refresh).
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn metrics(&self) -> &Rc<dyn FontMetrics> {
        &self.metrics
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// The display lines currently on screen, top first.
    pub fn texts(&self) -> &[Text] {
        &self.window
    }

    #[inline]
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    #[inline]
    pub fn x_shift(&self) -> f32 {
        self.x_shift
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x_max
    }

    #[inline]
    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    #[inline]
    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    /// Display lines that fit on screen, counting a partial line at the bottom.
    pub fn screen_line_size(&self) -> usize {
        let line_height = self.metrics.line_height();
        if line_height <= 0.0 {
            return 0;
        }
        (self.screen_height.max(0.0) / line_height).ceil() as usize
    }

    /// Standard characters that fit across the screen.
    pub fn screen_col_size(&self) -> usize {
        let char_width = self.metrics.standard_char_width();
        if char_width <= 0.0 {
            return 0;
        }
        (self.screen_width.max(0.0) / char_width).floor() as usize
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resizes the viewport.
    ///
    /// In wrapped mode a change in the number of columns re-wraps the document.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.sync_font_metrics();
        if let Layout::Wrapped(_) = self.layout {
            let cols = self.screen_col_size();
            if cols > 0 && cols != self.layout.chars_in_line() {
                self.layout.set_chars_in_line(&cx!(self), cols);
            }
        }
        self.clamp_top_line();
        self.fill_window();
    }

    /// Scrolls down by `n` display lines.
    pub fn scroll_next(&mut self, n: usize) {
        self.scroll_at(self.top_line.saturating_add(n));
    }

    /// Scrolls up by `n` display lines.
    pub fn scroll_prev(&mut self, n: usize) {
        self.scroll_at(self.top_line.saturating_sub(n));
    }

    /// Scrolls so that `line` is the top display line.
    pub fn scroll_at(&mut self, line: usize) {
        if self.sync_font_metrics() {
            self.clamp_top_line();
            self.fill_window();
        }
        let cx = cx!(self);
        let line = line.min(self.layout.line_size(&cx).saturating_sub(1));
        if line == self.top_line {
            return;
        }

        let screen_lines = self.screen_line_size();
        let old_top = self.top_line;
        self.top_line = line;

        if line.abs_diff(old_top) >= screen_lines {
            self.fill_window();
            return;
        }

        let entered = if line > old_top {
            let delta = line - old_top;
            self.window.drain(..delta.min(self.window.len()));
            let start = line + self.window.len();
            let entered = self.layout.texts(&cx, start, line.saturating_add(screen_lines));
            self.window.extend_from_slice(&entered);
            entered
        } else {
            let delta = old_top - line;
            let entered = self.layout.texts(&cx, line, line + delta);
            let mut window = Vec::with_capacity(screen_lines);
            window.extend_from_slice(&entered);
            window.extend(self.window.drain(..));
            window.truncate(screen_lines);
            self.window = window;
            entered
        };
        self.x_max = entered.iter().map(Text::width).fold(self.x_max, f32::max);

        tracing::trace!(
            from = old_top,
            to = line,
            entered = entered.len(),
            "incremental scroll"
        );
    }

    /// Scrolls horizontally to pixel offset `x`, floored at 0.
    pub fn scroll_x(&mut self, x: f32) {
        self.x_shift = x.max(0.0);
    }

    /// Scrolls the least amount needed to show display line `line` fully.
    ///
    /// Returns `true` if the viewport moved.
    pub fn ensure_visible(&mut self, line: usize) -> bool {
        let line_height = self.metrics.line_height();
        let visible = if line_height > 0.0 {
            (self.screen_height / line_height).floor() as usize
        } else {
            0
        };
        let line = line.min(self.line_size().saturating_sub(1));
        match scroll::top_line_to_reveal(self.top_line, line, visible) {
            Some(top) => {
                self.scroll_at(top);
                true
            }
            None => false,
        }
    }

    /// Scroll bar extents for the current viewport.
    pub fn scroll_bars(&self) -> ScrollBars {
        scroll::scroll_bars(
            self.line_size(),
            self.top_line,
            self.screen_line_size(),
            self.x_max,
            self.x_shift,
            self.screen_width,
        )
    }

    /// Gutter labels for the current window.
    pub fn line_numbers(&self) -> Vec<Text> {
        gutter::line_numbers(
            &self.window,
            self.row_size(),
            self.metrics.standard_char_width(),
        )
    }

    /// Screen-space location of (`row`, `col`), if it is in the window.
    pub fn location_on(&self, row: usize, col: usize) -> Option<Loc> {
        let cx = cx!(self);
        let lines = self.top_line..self.top_line.saturating_add(self.screen_line_size());
        let top_y = self.layout.y_on_layout(&cx, self.top_line);
        self.layout
            .loc(&cx, row, col, lines)
            .map(|loc| Loc::new(loc.x, loc.y - top_y))
    }

    /// Display line under screen-space `y`, clamped to the document.
    pub fn y_to_line_on_screen(&self, y: f32) -> usize {
        let line_height = self.metrics.line_height();
        let offset = if line_height > 0.0 {
            (y.max(0.0) / line_height).floor() as usize
        } else {
            0
        };
        self.top_line
            .saturating_add(offset)
            .min(self.line_size().saturating_sub(1))
    }

    // =========================================================================
    // Mode switching
    // =========================================================================

    /// Switches layout strategy.
    ///
    /// From plain, `"csv"` and `"tsv"` switch to a tabular layout and any other
    /// tag wraps at the screen width. From wrapped or tabular, any tag switches
    /// back to plain. A refused wrap leaves the current layout in place.
    pub fn toggle_layout(&mut self, tag: &str) {
        match self.layout {
            Layout::Plain(_) => match tag {
                "csv" => self.switch_to_tabular(','),
                "tsv" => self.switch_to_tabular('\t'),
                _ => self.wrap_with(self.screen_col_size()),
            },
            Layout::Wrapped(_) | Layout::Tabular(_) => self.install(Layout::Plain(PlainLayout)),
        }
    }

    /// Wraps at `chars` characters, or unwraps when `chars` is 0.
    ///
    /// Wrapping is refused for documents at or above the configured row limit.
    pub fn wrap_with(&mut self, chars: usize) {
        self.sync_font_metrics();
        if chars == 0 {
            if !self.layout.is_plain() {
                self.install(Layout::Plain(PlainLayout));
            }
            return;
        }
        if let Layout::Wrapped(_) = self.layout {
            self.layout.set_chars_in_line(&cx!(self), chars);
            self.clamp_top_line();
            self.fill_window();
            return;
        }
        if let Some(wrapped) = WrapLayout::try_new(&cx!(self), chars, self.config.wrap_row_limit) {
            self.install(Layout::Wrapped(wrapped));
        }
    }

    fn switch_to_tabular(&mut self, separator: char) {
        self.sync_font_metrics();
        let tabular = TabularLayout::new(
            &cx!(self),
            separator,
            self.config.tabular_sample_rows,
            self.config.tabular_margin_chars,
        );
        self.install(Layout::Tabular(tabular));
    }

    /// Replaces the strategy, keeping the top row in view.
    fn install(&mut self, layout: Layout) {
        let top_row = self.layout.line_to_row(&cx!(self), self.top_line);
        let from = self.layout.mode();
        self.layout = layout;
        self.top_line = self.layout.row_to_first_line(&cx!(self), top_row);
        self.x_shift = 0.0;
        tracing::debug!(?from, to = ?self.layout.mode(), top_row, "layout switched");
        self.fill_window();
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Relays out rows `[start_row, end_row)` (numbered before the edit) and
    /// refetches the window.
    pub fn refresh_buffer(&mut self, start_row: usize, end_row: usize) {
        self.sync_font_metrics();
        self.layout.refresh_at(&cx!(self), start_row, end_row);
        self.clamp_top_line();
        self.fill_window();
    }

    /// Relays out every display line from `line` onward and refetches the
    /// window.
    pub fn refresh(&mut self, line: usize) {
        self.sync_font_metrics();
        self.layout.refresh(&cx!(self), line);
        self.clamp_top_line();
        self.fill_window();
    }

    /// Relays out after an edit described by `dirty`.
    pub fn apply_dirty(&mut self, dirty: DirtyRows) {
        match dirty {
            DirtyRows::None => {}
            DirtyRows::Single(row) => self.refresh_buffer(row, row.saturating_add(1)),
            DirtyRows::Range { from, to } => self.refresh_buffer(from, to),
            DirtyRows::FromRowToEnd(row) => {
                let line = self.layout.row_to_first_line(&cx!(self), row);
                self.refresh(line);
            }
        }
    }

    /// Applies an edit to the document and relays out what it touched.
    pub fn edit<F>(&mut self, f: F) -> DirtyRows
    where
        F: FnOnce(&mut C) -> DirtyRows,
    {
        let dirty = f(&mut self.content);
        self.apply_dirty(dirty);
        dirty
    }

    /// Replaces the font metrics and relays out.
    pub fn update_font_metrics(&mut self, metrics: Rc<dyn FontMetrics>) {
        self.metrics = metrics;
        self.generation = self.metrics.generation();
        self.relayout();
    }

    /// Relays out if the shared metrics changed since the last layout.
    ///
    /// Returns `true` if a relayout happened.
    pub fn sync_font_metrics(&mut self) -> bool {
        let generation = self.metrics.generation();
        if generation == self.generation {
            return false;
        }
        self.generation = generation;
        self.relayout();
        true
    }

    fn relayout(&mut self) {
        if let Layout::Wrapped(_) = self.layout {
            let cols = self.screen_col_size();
            if cols > 0 {
                self.layout.set_chars_in_line(&cx!(self), cols);
            }
        }
        self.layout.refresh(&cx!(self), 0);
        self.clamp_top_line();
        self.fill_window();
    }

    fn clamp_top_line(&mut self) {
        let line_size = self.layout.line_size(&cx!(self));
        self.top_line = self.top_line.min(line_size.saturating_sub(1));
    }

    /// Refetches the whole window from `top_line`.
    fn fill_window(&mut self) {
        let cx = cx!(self);
        let screen_lines = self.screen_line_size();
        let end = self.top_line.saturating_add(screen_lines);
        self.window = self.layout.texts(&cx, self.top_line, end);
        self.x_max = self.window.iter().map(Text::width).fold(0.0, f32::max);
        tracing::debug!(
            top_line = self.top_line,
            lines = self.window.len(),
            x_max = self.x_max,
            "window filled"
        );
    }

    // =========================================================================
    // Layout queries
    // =========================================================================

    pub fn line_size(&self) -> usize {
        self.layout.line_size(&cx!(self))
    }

    pub fn row_size(&self) -> usize {
        self.layout.row_size(&cx!(self))
    }

    pub fn text(&self, line: usize) -> Text {
        self.layout.text(&cx!(self), line)
    }

    pub fn row_text_at(&self, row: usize) -> Text {
        self.layout.row_text_at(&cx!(self), row)
    }

    pub fn row_to_first_line(&self, row: usize) -> usize {
        self.layout.row_to_first_line(&cx!(self), row)
    }

    pub fn row_to_last_line(&self, row: usize) -> usize {
        self.layout.row_to_last_line(&cx!(self), row)
    }

    pub fn line_to_row(&self, line: usize) -> usize {
        self.layout.line_to_row(&cx!(self), line)
    }

    pub fn row_to_line(&self, row: usize, col: usize) -> usize {
        self.layout.row_to_line(&cx!(self), row, col)
    }

    pub fn chars_in_line(&self) -> usize {
        self.layout.chars_in_line()
    }

    pub fn home_col_on_row(&self, line: usize) -> usize {
        self.layout.home_col_on_row(&cx!(self), line)
    }

    pub fn end_col_on_row(&self, line: usize) -> usize {
        self.layout.end_col_on_row(&cx!(self), line)
    }

    pub fn x_to_col(&self, line: usize, x: f32) -> usize {
        self.layout.x_to_col(&cx!(self), line, x)
    }

    pub fn x_to_mid_col(&self, line: usize, x: f32) -> usize {
        self.layout.x_to_mid_col(&cx!(self), line, x)
    }

    pub fn x_on_layout(&self, line: usize, col: usize) -> f32 {
        self.layout.x_on_layout(&cx!(self), line, col)
    }

    pub fn y_on_layout(&self, line: usize) -> f32 {
        self.layout.y_on_layout(&cx!(self), line)
    }

    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }

    pub fn standard_char_width(&self) -> f32 {
        self.metrics.standard_char_width()
    }

    pub fn tab_size(&self) -> usize {
        self.metrics.tab_size()
    }
}
