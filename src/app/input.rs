use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::model::Mode;
use crate::app::{App, Message, Model};
use crate::editor::{Direction, NEWLINE};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if model.mode == Mode::Replace {
            return Some(key_byte(key).map_or(Message::CancelReplace, Message::Replace));
        }

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char('<') | KeyCode::Left => Some(Message::Move(Direction::Left)),
            KeyCode::Char('>') | KeyCode::Right => Some(Message::Move(Direction::Right)),
            KeyCode::Char('[') | KeyCode::Down => Some(Message::Move(Direction::Down)),
            KeyCode::Char(']') | KeyCode::Up => Some(Message::Move(Direction::Up)),
            KeyCode::Char('+') => Some(Message::Increment),
            KeyCode::Char('-') => Some(Message::Decrement),
            KeyCode::Char(',') => Some(Message::BeginReplace),
            KeyCode::Char('.') => Some(Message::Save),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// The raw byte a key press stands for, as a terminal in raw mode would send it.
pub(super) fn key_byte(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
            u8::try_from(c.to_ascii_uppercase()).ok().map(|b| b & 0x1f)
        }
        KeyCode::Char(c) => u8::try_from(c).ok(),
        KeyCode::Enter => Some(NEWLINE),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x08),
        KeyCode::Esc => Some(0x1b),
        KeyCode::Delete => Some(0x7f),
        _ => None,
    }
}
