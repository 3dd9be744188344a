//! Input handling.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use scorekeeper_frontend_core::EventConsumer;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self
            .input
            .handle_key(key, &self.app_state, &self.view_model)
        {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::Submit(command) => {
                if self.dispatch(command).requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::SubmitRow { row, command } => {
                self.app_state.focus_row(row, self.view_model.board.len());
                self.dispatch(command);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::MoveCursor(movement) => {
                self.app_state
                    .move_cursor(movement, self.view_model.board.len());
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::ToggleHelp => {
                self.app_state.toggle_help();
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::ExitModal => {
                self.app_state.exit_to_normal();
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }
}
