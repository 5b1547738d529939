use std::path::PathBuf;

use crate::editor::ByteGrid;
use crate::ui::glyph::{MAX_TAB_WIDTH, TAB_WIDTH};
use crate::ui::viewport::Viewport;

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

/// What the next key press means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys are commands.
    #[default]
    Normal,
    /// The next key is written as a raw byte.
    Replace,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The byte grid being edited
    pub grid: ByteGrid,
    /// Visible window, recomputed on every draw
    pub viewport: Viewport,
    /// Path the grid is loaded from and saved to
    pub file_path: PathBuf,
    /// Cells spanned by a tab token
    pub tab_width: usize,
    /// Whether keys are commands or a pending replacement byte
    pub mode: Mode,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model for a loaded grid.
    pub fn new(file_path: PathBuf, grid: ByteGrid) -> Self {
        Self {
            grid,
            file_path,
            ..Self::default()
        }
    }

    /// Override the tab token width.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.clamp(1, MAX_TAB_WIDTH);
        self
    }

    /// Show a message in the status line until the next key press.
    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
        });
    }

    pub(super) fn clear_toast(&mut self) {
        self.toast = None;
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            grid: ByteGrid::empty(),
            viewport: Viewport::default(),
            file_path: PathBuf::new(),
            tab_width: TAB_WIDTH,
            mode: Mode::Normal,
            toast: None,
            should_quit: false,
        }
    }
}
