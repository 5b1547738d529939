use ratatui::prelude::*;
use ratatui::symbols::line;
use ratatui::widgets::Block;

use crate::app::Model;

use super::grid_view::{GridView, text_region};
use super::status;

const TITLE: &str = " bytetape ";

/// Split the frame inside its border into grid, separator and status rows.
fn split_frame(area: Rect) -> [Rect; 3] {
    let inner = Block::bordered().inner(area);
    Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner)
}

/// Cells the grid text is drawn into, for a frame of size `area`.
pub fn text_area(area: Rect) -> Rect {
    text_region(split_frame(area)[0])
}

/// Row holding the status line, for a frame of size `area`.
pub fn status_line_area(area: Rect) -> Rect {
    split_frame(area)[2]
}

/// Render the complete UI.
///
/// Drawing the grid scrolls the model's viewport to the cursor, so this must
/// run once after every mutation.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::bordered().title(TITLE), area);

    let [grid_area, separator_area, status_area] = split_frame(area);
    frame.render_stateful_widget(
        GridView::new(&model.grid, model.tab_width),
        grid_area,
        &mut model.viewport,
    );
    render_separator(model, frame.buffer_mut(), area, separator_area);
    status::render_status_bar(model, frame, status_area);

    let text = text_region(grid_area);
    if let Some((x, y)) = model.viewport.cursor_offset(&model.grid, model.tab_width)
        && let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y))
    {
        frame.set_cursor_position(Position::new(text.x + x, text.y + y));
    }
}

/// Horizontal rule joining the outer border, titled with the file name.
fn render_separator(model: &Model, buf: &mut Buffer, area: Rect, separator: Rect) {
    if separator.height == 0 || area.width < 2 {
        return;
    }
    let y = separator.y;
    for x in area.left()..area.right() {
        let symbol = if x == area.left() {
            line::VERTICAL_RIGHT
        } else if x + 1 == area.right() {
            line::VERTICAL_LEFT
        } else {
            line::HORIZONTAL
        };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol);
        }
    }

    let name = model.file_path.display().to_string();
    let max_width = usize::from(area.width.saturating_sub(2));
    buf.set_stringn(area.x + 1, y, name, max_width, Style::default());
}
