//! Input processing for the terminal UI.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scorekeeper_core::Command;
use scorekeeper_frontend_core::ViewModel;

use crate::state::{AppMode, AppState, CursorMove};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch the command to the scoring engine.
    Submit(Command),
    /// Digit shortcut: focus the row, then dispatch the command.
    SubmitRow { row: usize, command: Command },
    MoveCursor(CursorMove),
    ToggleHelp,
    ExitModal,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into scorekeeping commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Board keys resolve against `view`, so the returned command always
    /// refers to an amount currently on screen.
    pub fn handle_key(&self, key: KeyEvent, app_state: &AppState, view: &ViewModel) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match app_state.mode {
            AppMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => KeyAction::ExitModal,
                KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            },
            AppMode::Normal if view.wager.is_some() => self.wager_key(key, view),
            AppMode::Normal => self.board_key(key, app_state.cursor, view),
        }
    }

    fn board_key(&self, key: KeyEvent, cursor: usize, view: &ViewModel) -> KeyAction {
        match key.code {
            KeyCode::Up => KeyAction::MoveCursor(CursorMove::Up),
            KeyCode::Down => KeyAction::MoveCursor(CursorMove::Down),
            KeyCode::Enter => self.open_row(cursor, view),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(raw) => match raw.to_ascii_lowercase() {
                'k' => KeyAction::MoveCursor(CursorMove::Up),
                'j' => KeyAction::MoveCursor(CursorMove::Down),
                ' ' => self.open_row(cursor, view),
                digit @ '1'..='5' => {
                    let row = digit as usize - '1' as usize;
                    match view.board.get(row) {
                        Some(entry) => KeyAction::SubmitRow {
                            row,
                            command: Command::SelectAmount(entry.amount),
                        },
                        None => KeyAction::None,
                    }
                }
                'd' => view
                    .board
                    .get(cursor)
                    .map(|entry| KeyAction::Submit(Command::MarkDailyDouble(entry.amount)))
                    .unwrap_or(KeyAction::None),
                's' => KeyAction::Submit(Command::SwitchRound),
                ch => self.common_key(ch),
            },
            _ => KeyAction::None,
        }
    }

    fn wager_key(&self, key: KeyEvent, view: &ViewModel) -> KeyAction {
        let text = view
            .wager
            .as_ref()
            .map(|panel| panel.text.as_str())
            .unwrap_or_default();

        match key.code {
            KeyCode::Backspace => {
                let mut edited = text.to_string();
                if edited.pop().is_none() {
                    return KeyAction::None;
                }
                KeyAction::Submit(Command::UpdateWager(edited))
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
                KeyAction::Submit(Command::UpdateWager(format!("{text}{ch}")))
            }
            KeyCode::Char(raw) => match self.common_key(raw.to_ascii_lowercase()) {
                // Over-score or unparsable wagers are not offered for scoring.
                KeyAction::Submit(Command::SubmitAnswer(_)) if !view.can_submit => KeyAction::None,
                action => action,
            },
            _ => KeyAction::None,
        }
    }

    /// Keys shared by the board and wager panels.
    fn common_key(&self, ch: char) -> KeyAction {
        match ch {
            'c' | 'y' => KeyAction::Submit(Command::SubmitAnswer(true)),
            'x' | 'n' => KeyAction::Submit(Command::SubmitAnswer(false)),
            'f' => KeyAction::Submit(Command::TriggerFinalJeopardy),
            'r' => KeyAction::Submit(Command::Reset),
            'q' => KeyAction::Quit,
            '?' => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn open_row(&self, cursor: usize, view: &ViewModel) -> KeyAction {
        view.board
            .get(cursor)
            .map(|entry| KeyAction::Submit(Command::SelectAmount(entry.amount)))
            .unwrap_or(KeyAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use scorekeeper_core::ScoringEngine;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn board_view() -> ViewModel {
        ViewModel::from_engine(&ScoringEngine::new())
    }

    fn wager_view(text: &str) -> ViewModel {
        let mut engine = ScoringEngine::new();
        engine.select_amount(400).unwrap();
        engine.submit_answer(true).unwrap();
        engine.mark_daily_double(200).unwrap();
        engine.update_wager(text).unwrap();
        ViewModel::from_engine(&engine)
    }

    #[test]
    fn enter_opens_row_under_cursor() {
        let handler = InputHandler::new();
        let state = AppState {
            cursor: 2,
            ..AppState::new()
        };
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &state, &board_view()),
            KeyAction::Submit(Command::SelectAmount(600))
        );
    }

    #[test]
    fn digits_open_rows_directly() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('5')), &AppState::new(), &board_view()),
            KeyAction::SubmitRow {
                row: 4,
                command: Command::SelectAmount(1000)
            }
        );
    }

    #[test]
    fn maps_board_keys() {
        let handler = InputHandler::new();
        let state = AppState::new();
        let view = board_view();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('j')), &state, &view),
            KeyAction::MoveCursor(CursorMove::Down)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d')), &state, &view),
            KeyAction::Submit(Command::MarkDailyDouble(200))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('C')), &state, &view),
            KeyAction::Submit(Command::SubmitAnswer(true))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n')), &state, &view),
            KeyAction::Submit(Command::SubmitAnswer(false))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s')), &state, &view),
            KeyAction::Submit(Command::SwitchRound)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &state, &view),
            KeyAction::Quit
        );
    }

    #[test]
    fn wager_keys_edit_text() {
        let handler = InputHandler::new();
        let state = AppState::new();
        let view = wager_view("25");
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('0')), &state, &view),
            KeyAction::Submit(Command::UpdateWager("250".into()))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), &state, &view),
            KeyAction::Submit(Command::UpdateWager("2".into()))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), &state, &view),
            KeyAction::Submit(Command::SubmitAnswer(false))
        );
    }

    #[test]
    fn shifted_letters_work_on_the_board() {
        let handler = InputHandler::new();
        let state = AppState::new();
        let view = board_view();
        for (raw, expected) in [
            ('X', KeyAction::Submit(Command::SubmitAnswer(false))),
            ('Y', KeyAction::Submit(Command::SubmitAnswer(true))),
            ('F', KeyAction::Submit(Command::TriggerFinalJeopardy)),
            ('R', KeyAction::Submit(Command::Reset)),
            ('Q', KeyAction::Quit),
        ] {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(raw)), &state, &view),
                expected
            );
        }
    }

    #[test]
    fn over_score_wager_is_not_submitted() {
        let handler = InputHandler::new();
        // Score 400, wager 500.
        let view = wager_view("500");
        assert!(!view.can_submit);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c')), &AppState::new(), &view),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), &AppState::new(), &view),
            KeyAction::Submit(Command::Reset)
        );
    }

    #[test]
    fn escape_in_wager_mode_is_ignored() {
        let handler = InputHandler::new();
        let view = wager_view("");
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &AppState::new(), &view),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), &AppState::new(), &view),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s')), &AppState::new(), &view),
            KeyAction::None
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let handler = InputHandler::new();
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(
            handler.handle_key(ctrl_c, &AppState::new(), &wager_view("5")),
            KeyAction::Quit
        );
    }

    #[test]
    fn help_overlay_swallows_scoring_keys() {
        let handler = InputHandler::new();
        let mut state = AppState::new();
        state.toggle_help();
        let view = board_view();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c')), &state, &view),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('?')), &state, &view),
            KeyAction::ExitModal
        );
    }
}
