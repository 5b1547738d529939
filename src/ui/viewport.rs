//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the visible window into the byte grid and
//! recomputes it after every cursor change so the cursor stays on screen.

use std::ops::Range;

use crate::editor::ByteGrid;

use super::glyph;

/// Manages the visible portion of a byte grid.
///
/// The viewport tracks:
/// - The text region size of the last frame (rows, cols)
/// - The first visible buffer row
/// - The first visible byte column, shared by every row
///
/// # Example
///
/// ```
/// use bytetape::editor::{ByteGrid, Direction};
/// use bytetape::ui::viewport::Viewport;
///
/// let mut grid = ByteGrid::empty();
/// for _ in 0..5 {
///     grid.move_cursor(Direction::Down);
/// }
///
/// let mut vp = Viewport::new(3, 10);
/// vp.scroll_to(&grid, 4);
/// assert_eq!(vp.first_row(), 3);
/// assert_eq!(vp.cursor_offset(&grid, 4), Some((0, 2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    first_row: usize,
    first_col: usize,
    rows: usize,
    cols: usize,
}

impl Viewport {
    /// Create a viewport at the origin with the given text region size.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            first_row: 0,
            first_col: 0,
            rows,
            cols,
        }
    }

    /// First visible buffer row.
    pub const fn first_row(&self) -> usize {
        self.first_row
    }

    /// First visible byte column.
    pub const fn first_col(&self) -> usize {
        self.first_col
    }

    /// Number of text rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of text cells per row.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the text region has no cells at all.
    pub const fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Adopt the text region size of the frame being drawn.
    pub const fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Buffer rows drawn in the current frame.
    pub fn visible_rows(&self, total_lines: usize) -> Range<usize> {
        let start = self.first_row.min(total_lines);
        let end = (self.first_row + self.rows).min(total_lines);
        start..end
    }

    /// Whether rows are scrolled off above.
    pub const fn can_scroll_up(&self) -> bool {
        self.first_row > 0
    }

    /// Whether rows remain below the window.
    pub const fn has_rows_below(&self, total_lines: usize) -> bool {
        total_lines.saturating_sub(self.first_row) > self.rows
    }

    /// Move the window so the grid's cursor is visible.
    ///
    /// Rows and columns are clamped independently. A line whose glyphs are
    /// wider than their byte count would push the cursor past the right edge
    /// and onto a wrapped row; the first column then advances until the
    /// cursor cell fits on the line's own row.
    pub fn scroll_to(&mut self, grid: &ByteGrid, tab_width: usize) {
        if self.is_degenerate() {
            return;
        }
        let cursor = grid.cursor();

        if self.first_row > cursor.row {
            self.first_row = cursor.row;
        } else if cursor.row - self.first_row >= self.rows {
            self.first_row = cursor.row + 1 - self.rows;
        }

        if self.first_col > cursor.col {
            self.first_col = cursor.col;
        } else if cursor.col - self.first_col >= self.cols {
            self.first_col = cursor.col + 1 - self.cols;
        }

        let line = grid.current_line();
        let mut before = glyph::run_width(&line[self.first_col..cursor.col], tab_width);
        // One cell for the cursor itself.
        while before + 1 > self.cols && self.first_col < cursor.col {
            before -= glyph::width(line[self.first_col], tab_width);
            self.first_col += 1;
        }
    }

    /// Cell offset `(x, y)` of the cursor inside the text region.
    ///
    /// `None` when the region is degenerate or the cursor is off screen.
    pub fn cursor_offset(&self, grid: &ByteGrid, tab_width: usize) -> Option<(usize, usize)> {
        if self.is_degenerate() {
            return None;
        }
        let cursor = grid.cursor();
        let y = cursor.row.checked_sub(self.first_row)?;
        if y >= self.rows {
            return None;
        }
        let line = grid.current_line();
        let x = glyph::run_width(line.get(self.first_col..cursor.col)?, tab_width);
        (x < self.cols).then_some((x, y))
    }
}
