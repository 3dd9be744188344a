//! Application state for mode management and UI context.

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Scoring keys go to the engine.
    #[default]
    Normal,
    /// Key-binding overlay; scoring keys are ignored until it is closed.
    Help,
}

impl AppMode {
    pub fn is_overlay(&self) -> bool {
        matches!(self, AppMode::Help)
    }
}

/// Cursor movement on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
}

/// UI-only state. Nothing here affects scoring.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Highlighted board row.
    pub cursor: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor within `rows`, stopping at either end.
    pub fn move_cursor(&mut self, movement: CursorMove, rows: usize) {
        if rows == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = match movement {
            CursorMove::Up => self.cursor.saturating_sub(1),
            CursorMove::Down => (self.cursor + 1).min(rows - 1),
        };
    }

    /// Places the cursor on `row`, e.g. after a digit key opened it.
    pub fn focus_row(&mut self, row: usize, rows: usize) {
        self.cursor = row.min(rows.saturating_sub(1));
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }

    pub fn exit_to_normal(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Returns the cursor to the top row, e.g. after a reset.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_stops_at_board_edges() {
        let mut state = AppState::new();
        state.move_cursor(CursorMove::Up, 5);
        assert_eq!(state.cursor, 0);

        for _ in 0..10 {
            state.move_cursor(CursorMove::Down, 5);
        }
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn focus_row_clamps() {
        let mut state = AppState::new();
        state.focus_row(9, 5);
        assert_eq!(state.cursor, 4);
        state.focus_row(3, 0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn toggle_help_switches_modes() {
        let mut state = AppState::new();
        state.toggle_help();
        assert_eq!(state.mode, AppMode::Help);
        assert!(state.mode.is_overlay());
        state.toggle_help();
        assert_eq!(state.mode, AppMode::Normal);
    }
}
