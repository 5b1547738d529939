//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Mode, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::editor::DEFAULT_FILLER;
use crate::ui::glyph::{MAX_TAB_WIDTH, TAB_WIDTH};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    tab_width: usize,
    filler: u8,
}

impl App {
    /// Create a new application for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            tab_width: TAB_WIDTH,
            filler: DEFAULT_FILLER,
        }
    }

    /// Set the number of cells a tab token spans.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.clamp(1, MAX_TAB_WIDTH);
        self
    }

    /// Set the byte inserted when the cursor grows a line.
    pub const fn with_filler(mut self, filler: u8) -> Self {
        self.filler = filler;
        self
    }
}
