// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::ByteGrid)
    clippy::module_name_repetitions
)]

//! # Bytetape
//!
//! A terminal editor that treats a file as a grid of raw bytes.
//!
//! Every line of the file is a row of bytes and the cursor sits on one of
//! them, or on the virtual newline slot past the end of the row. Moving off
//! the edge of the grid grows it, and incrementing or decrementing the byte
//! under the cursor is the main way to edit.
//!
//! ## Architecture
//!
//! Bytetape uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: The byte grid and its file format
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{ByteGrid, Cursor, Direction, Slot};
    pub use crate::ui::viewport::Viewport;
}
