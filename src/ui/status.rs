use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

/// Byte value, row and column of the cursor.
///
/// The column count includes the virtual slot, so `Col` can read one past
/// the last byte.
pub fn status_text(model: &Model) -> String {
    let grid = &model.grid;
    let cursor = grid.cursor();
    let rows = grid.line_count();
    let cols = grid.current_line().len() + 1;
    format!(
        "{:03}  Row {:>rw$}/{rows}  Col {:>cw$}/{cols}",
        grid.current_slot().value(),
        cursor.row + 1,
        cursor.col + 1,
        rw = digits(rows),
        cw = digits(cols),
    )
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(status_text(model)), area);

    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let style = match level {
        ToastLevel::Info => Style::default().bg(Color::DarkGray).fg(Color::White),
        ToastLevel::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
        ToastLevel::Error => Style::default().bg(Color::Red).fg(Color::White),
    };
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .min(area.width);
    let message_area = Rect {
        x: area.right() - width,
        width,
        ..area
    };
    frame.render_widget(Paragraph::new(message).style(style), message_area);
}
