use tracing::warn;

use crate::app::{App, Message, Model, ToastLevel};
use crate::editor::persist;

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::Save) {
            Self::save(model);
        }
    }

    fn save(model: &mut Model) {
        match persist::save(&model.grid, &model.file_path) {
            Ok(()) => {
                model.grid.mark_clean();
                model.show_toast(ToastLevel::Info, "File written");
            }
            Err(err) => {
                warn!(error = %err, "save failed");
                model.show_toast(
                    ToastLevel::Error,
                    format!("Cannot write to file: {}", model.file_path.display()),
                );
            }
        }
    }
}
