//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and cursor visibility
//! - [`grid_view`]: Widget drawing the byte grid and scroll indicators
//! - [`glyph`]: Byte to glyph mapping

pub mod glyph;
pub mod grid_view;
pub mod viewport;

mod render;
mod status;

pub use render::{render, status_line_area, text_area};
