//! Command execution against the owned engine.

use scorekeeper_core::Command;
use scorekeeper_frontend_core::{EventConsumer, EventImpact, view_model::ViewModel};

use super::super::EventLoop;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Executes `command`, reports the result to the consumer and refreshes
    /// the view model. Rejections leave the engine untouched.
    pub(in crate::event) fn dispatch(&mut self, command: Command) -> EventImpact {
        match self.engine.execute(&command) {
            Ok(outcome) => {
                let impact = self.consumer.on_outcome(&command, &outcome);
                self.view_model = ViewModel::from_engine(&self.engine);
                if matches!(command, Command::Reset) {
                    self.app_state.reset_cursor();
                }
                // Keep the cursor on whichever amount is open.
                if let Some(row) = self.view_model.open_row() {
                    self.app_state.focus_row(row, self.view_model.board.len());
                }
                impact
            }
            Err(error) => self.consumer.on_rejected(&command, &error),
        }
    }
}
