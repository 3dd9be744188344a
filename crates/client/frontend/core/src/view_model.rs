//! Presentation-ready view of the scoring engine.
//!
//! Rebuilt from the engine after every command. Frontends render this instead
//! of reaching into [`GameState`] so labels and gating decisions stay
//! consistent across UIs.

use scorekeeper_core::{GameState, Mode, Points, Round, ScoringEngine, WagerStatus};

use crate::format;

/// One row of the clue board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRow {
    pub amount: Points,
    pub label: String,
    /// The amount is opened and awaiting Correct/Incorrect.
    pub is_open: bool,
}

/// Wager entry panel shown in Daily Double and Final Jeopardy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerPanel {
    /// `"Daily Double!"` or `"Final Jeopardy!"`.
    pub title: &'static str,
    /// Raw text typed so far.
    pub text: String,
    /// `"Max wager: $<score>"`.
    pub hint: String,
    /// Validation message, if the wager exceeds the score.
    pub error: Option<String>,
    pub status: WagerStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub score: Points,
    pub score_label: String,
    pub correct: u32,
    pub incorrect: u32,
    pub round: Round,
    pub round_label: &'static str,
    pub mode: Mode,
    pub selected_amount: Option<Points>,
    /// Board rows for the active round. Empty while a wager is taken.
    pub board: Vec<BoardRow>,
    pub wager: Option<WagerPanel>,
    /// Correct/Incorrect are available.
    pub can_submit: bool,
}

impl ViewModel {
    pub fn from_engine(engine: &ScoringEngine) -> Self {
        let state = engine.state();
        let board = if state.mode.is_wager_mode() {
            Vec::new()
        } else {
            engine
                .clue_values()
                .iter()
                .map(|&amount| BoardRow {
                    amount,
                    label: format::money(amount),
                    is_open: state.selected_amount == Some(amount),
                })
                .collect()
        };

        Self {
            score: state.score,
            score_label: format::money(state.score),
            correct: state.correct_count,
            incorrect: state.incorrect_count,
            round: state.round,
            round_label: state.round.into(),
            mode: state.mode,
            selected_amount: state.selected_amount,
            board,
            wager: wager_panel(state, engine.wager_status()),
            can_submit: engine.can_submit(),
        }
    }

    /// Index of the opened board row, if any.
    pub fn open_row(&self) -> Option<usize> {
        self.board.iter().position(|row| row.is_open)
    }
}

fn wager_panel(state: &GameState, status: WagerStatus) -> Option<WagerPanel> {
    if !state.mode.is_wager_mode() {
        return None;
    }
    Some(WagerPanel {
        title: state.mode.into(),
        text: state.wager_text.clone(),
        hint: format::wager_hint(state.score),
        error: state.wager_error.clone(),
        status,
    })
}
