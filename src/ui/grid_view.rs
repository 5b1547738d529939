//! Widget that draws the byte grid with its scroll indicators.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;

use crate::editor::ByteGrid;

use super::glyph::{Glyph, TERMINATOR};
use super::viewport::Viewport;

const UP_ARROW: char = '↑';
const DOWN_ARROW: char = '↓';
const LEFT_ARROW: char = '←';
const RIGHT_ARROW: char = '→';

/// Style for escapes, symbols and the line terminator.
pub fn special_style() -> Style {
    Style::default().add_modifier(Modifier::DIM | Modifier::UNDERLINED)
}

/// Style for scroll indicators.
pub fn indicator_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Text region inside `area`, leaving a one-cell margin for indicators.
pub fn text_region(area: Rect) -> Rect {
    if area.width < 3 || area.height < 3 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2)
}

/// Draws visible lines of a [`ByteGrid`].
///
/// Rendering first adopts the text region size into the [`Viewport`] state
/// and scrolls it to the cursor, so the state always reflects the frame that
/// was drawn. Each buffer line takes one screen row; content wider than the
/// row is clipped and flagged with a right arrow.
pub struct GridView<'a> {
    grid: &'a ByteGrid,
    tab_width: usize,
}

impl<'a> GridView<'a> {
    pub const fn new(grid: &'a ByteGrid, tab_width: usize) -> Self {
        Self { grid, tab_width }
    }
}

impl StatefulWidget for GridView<'_> {
    type State = Viewport;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Viewport) {
        let text = text_region(area);
        state.resize(usize::from(text.height), usize::from(text.width));
        state.scroll_to(self.grid, self.tab_width);
        if state.is_degenerate() {
            return;
        }

        let first_col = state.first_col();
        let lines = self.grid.lines();
        for (screen_row, line) in (text.y..text.bottom()).zip(&lines[state.visible_rows(lines.len())]) {
            let mut pen = Pen::new(buf, text.x, text.right(), screen_row);
            let mut col = first_col;
            while col < line.len() && pen.draw(Glyph::of(line[col]), self.tab_width) {
                col += 1;
            }
            if col == line.len() {
                pen.put(TERMINATOR, special_style());
            }

            if first_col > 0 && !line.is_empty() {
                put_cell(buf, area.x, screen_row, LEFT_ARROW, indicator_style());
                if first_col > line.len() {
                    let offset = format!(" {}", first_col - line.len());
                    let mut pen = Pen::new(buf, text.x, text.right(), screen_row);
                    for ch in offset.chars() {
                        pen.put(ch, indicator_style());
                    }
                }
            }
            if col < line.len() {
                put_cell(buf, text.right(), screen_row, RIGHT_ARROW, indicator_style());
            }
        }

        let arrow_cells = text.x..text.right().min(text.x + 3);
        if state.can_scroll_up() {
            for x in arrow_cells.clone() {
                put_cell(buf, x, area.y, UP_ARROW, indicator_style());
            }
        }
        if state.has_rows_below(lines.len()) {
            for x in arrow_cells {
                put_cell(buf, x, text.bottom(), DOWN_ARROW, indicator_style());
            }
        }
    }
}

fn put_cell(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Writes glyph cells left to right along one screen row.
struct Pen<'b> {
    buf: &'b mut Buffer,
    x: u16,
    right: u16,
    y: u16,
}

impl<'b> Pen<'b> {
    const fn new(buf: &'b mut Buffer, x: u16, right: u16, y: u16) -> Self {
        Self { buf, x, right, y }
    }

    /// Put one cell. Returns `false` once the row is full.
    fn put(&mut self, ch: char, style: Style) -> bool {
        if self.x >= self.right {
            return false;
        }
        put_cell(self.buf, self.x, self.y, ch, style);
        self.x += 1;
        true
    }

    /// Draw every cell of a glyph. Returns `false` if it was cut off.
    fn draw(&mut self, glyph: Glyph, tab_width: usize) -> bool {
        let style = if glyph.is_special() {
            special_style()
        } else {
            Style::default()
        };
        match glyph {
            Glyph::Literal(ch) | Glyph::Symbol(ch) => self.put(ch, style),
            Glyph::Escape(letter) => self.put('\\', style) && self.put(letter, style),
            Glyph::Tab => {
                // Padding stops at the row edge.
                self.put('\\', style)
                    && self.put('t', style)
                    && (1..tab_width).all(|_| self.put(' ', Style::default()))
            }
        }
    }
}
