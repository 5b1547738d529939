use tracing::debug;

use crate::app::model::Mode;
use crate::app::{Model, ToastLevel};
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input; anything else the terminal reports only
/// triggers a redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Tape
    /// Move the cursor, growing the grid at its edges
    Move(Direction),
    /// Add one to the byte under the cursor
    Increment,
    /// Subtract one from the byte under the cursor
    Decrement,

    // Replace
    /// Wait for the next key and write it as a raw byte
    BeginReplace,
    /// Write a byte under the cursor
    Replace(u8),
    /// Leave replace mode without writing
    CancelReplace,

    // File
    /// Write the grid back to its file
    Save,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Saving is the one side effect and is handled by the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Status messages last exactly one keystroke.
    model.clear_toast();

    match msg {
        Message::Move(direction) => model.grid.move_cursor(direction),
        Message::Increment => model.grid.increment(),
        Message::Decrement => model.grid.decrement(),
        Message::BeginReplace => {
            model.mode = Mode::Replace;
            model.show_toast(ToastLevel::Info, "Replace");
        }
        Message::Replace(byte) => {
            model.grid.write(byte);
            model.mode = Mode::Normal;
        }
        Message::CancelReplace => {
            model.mode = Mode::Normal;
        }
        Message::Save => {}
        Message::Quit => {
            model.should_quit = true;
        }
    }
    debug!(cursor = ?model.grid.cursor(), lines = model.grid.line_count(), "updated");
    model
}
