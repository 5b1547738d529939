use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::app::{App, Model, update};
use crate::editor::persist;

impl App {
    /// Load the file and run the editor until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read, or if the
    /// terminal can't be initialized or drawn to. A load failure is reported
    /// before the terminal is touched.
    pub fn run(&self) -> Result<()> {
        let grid = persist::load(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?
            .with_filler(self.filler);
        let mut model = Model::new(self.file_path.clone(), grid).with_tab_width(self.tab_width);

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - bytetape requires an interactive terminal")?;

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// One blocking read, one update, one full redraw, until quit.
    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        terminal.draw(|frame| Self::view(model, frame))?;
        loop {
            let event = event::read()?;
            if let Some(msg) = Self::handle_event(&event, model) {
                debug!(?msg, "message");
                let side_msg = msg.clone();
                *model = update(std::mem::take(model), msg);
                Self::handle_message_side_effects(model, &side_msg);
            }

            if model.should_quit {
                break;
            }
            terminal.draw(|frame| Self::view(model, frame))?;
        }
        Ok(())
    }
}
