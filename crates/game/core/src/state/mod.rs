//! Authoritative scorekeeping state.
//!
//! This module owns the data structures that describe a session: score,
//! tallies, round, clue selection and the in-progress wager. Frontends read
//! this state but mutate it exclusively through the engine.
mod error;

pub use error::StateError;

use crate::config::GameConfig;
use crate::wager;

/// Score and wager unit. Scores may go negative.
pub type Points = i64;

/// Current round of play. The Double round multiplies every face value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    #[default]
    #[strum(to_string = "Single Jeopardy")]
    Single,
    #[strum(to_string = "Double Jeopardy!")]
    Double,
}

impl Round {
    /// Returns the other round.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }

    /// Factor applied to the base clue values in this round.
    pub const fn multiplier(self, config: &GameConfig) -> Points {
        match self {
            Self::Single => 1,
            Self::Double => config.double_multiplier,
        }
    }
}

/// Which input surface is active.
///
/// A single three-way mode; Daily Double and Final Jeopardy can never be
/// active at the same time.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Clue amounts are selectable without a wager.
    #[default]
    #[strum(to_string = "Board")]
    Board,
    /// A custom wager up to the current score replaces the clue value.
    #[strum(to_string = "Daily Double!")]
    DailyDouble,
    /// End-of-game clue, always wager based.
    #[strum(to_string = "Final Jeopardy!")]
    FinalJeopardy,
}

impl Mode {
    /// Returns true for the modes that take a typed wager.
    pub const fn is_wager_mode(self) -> bool {
        matches!(self, Self::DailyDouble | Self::FinalJeopardy)
    }
}

/// Canonical snapshot of a scorekeeping session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Running total. No floor.
    pub score: Points,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub round: Round,
    /// Clue value currently opened on the board, or
    /// [`GameConfig::FINAL_JEOPARDY_SENTINEL`] during Final Jeopardy.
    pub selected_amount: Option<Points>,
    pub mode: Mode,
    /// Raw text of the in-progress wager. Empty means no wager entered.
    pub wager_text: String,
    /// Validation message for `wager_text`, if it exceeds the score.
    pub wager_error: Option<String>,
}

impl GameState {
    /// Creates the session start state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_daily_double(&self) -> bool {
        self.mode == Mode::DailyDouble
    }

    pub fn is_final_jeopardy(&self) -> bool {
        self.mode == Mode::FinalJeopardy
    }

    /// Number of scoring transitions since the last reset.
    pub fn answered(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// Returns true while a board amount is opened and awaiting an answer.
    pub fn has_open_amount(&self) -> bool {
        self.mode == Mode::Board && self.selected_amount.is_some()
    }

    /// Drops the wager text and its validation message.
    pub(crate) fn clear_wager(&mut self) {
        self.wager_text.clear();
        self.wager_error = None;
    }

    /// Checks the invariants that must hold between any two transitions.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        if self.mode == Mode::Board && !self.wager_text.is_empty() {
            return Err(StateError::WagerOutsideWagerMode {
                text: self.wager_text.clone(),
            });
        }

        let expected = wager::validate(&self.wager_text, self.score).error;
        if self.wager_error.is_some() != expected.is_some() {
            return Err(StateError::WagerErrorOutOfSync {
                text: self.wager_text.clone(),
                score: self.score,
                has_error: self.wager_error.is_some(),
            });
        }

        match (self.mode, self.selected_amount) {
            (Mode::DailyDouble, None) => Err(StateError::MissingSelection { mode: self.mode }),
            (Mode::FinalJeopardy, Some(amount))
                if amount != GameConfig::FINAL_JEOPARDY_SENTINEL =>
            {
                Err(StateError::UnexpectedSelection {
                    mode: self.mode,
                    amount,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty_board() {
        let state = GameState::new();
        assert_eq!(state.score, 0);
        assert_eq!(state.answered(), 0);
        assert_eq!(state.round, Round::Single);
        assert_eq!(state.mode, Mode::Board);
        assert!(state.selected_amount.is_none());
        assert!(state.wager_text.is_empty());
        assert!(state.wager_error.is_none());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn round_labels_and_toggle() {
        assert_eq!(Round::Single.to_string(), "Single Jeopardy");
        assert_eq!(Round::Double.to_string(), "Double Jeopardy!");
        assert_eq!(Round::Single.toggled(), Round::Double);
        assert_eq!(Round::Double.toggled(), Round::Single);
    }

    #[test]
    fn mode_flags_are_exclusive() {
        let mut state = GameState::new();
        state.mode = Mode::DailyDouble;
        assert!(state.is_daily_double() && !state.is_final_jeopardy());
        state.mode = Mode::FinalJeopardy;
        assert!(!state.is_daily_double() && state.is_final_jeopardy());
    }

    #[test]
    fn wager_text_in_board_mode_breaks_invariants() {
        let state = GameState {
            wager_text: "100".to_string(),
            ..GameState::new()
        };
        assert!(matches!(
            state.check_invariants(),
            Err(StateError::WagerOutsideWagerMode { .. })
        ));
    }

    #[test]
    fn stale_wager_error_breaks_invariants() {
        let state = GameState {
            score: 500,
            mode: Mode::FinalJeopardy,
            selected_amount: Some(0),
            wager_text: "100".to_string(),
            wager_error: Some(GameConfig::WAGER_EXCEEDS_SCORE.to_string()),
            ..GameState::new()
        };
        assert!(matches!(
            state.check_invariants(),
            Err(StateError::WagerErrorOutOfSync { .. })
        ));
    }

    #[test]
    fn daily_double_needs_a_selection() {
        let state = GameState {
            mode: Mode::DailyDouble,
            ..GameState::new()
        };
        assert_eq!(
            state.check_invariants(),
            Err(StateError::MissingSelection {
                mode: Mode::DailyDouble
            })
        );
    }
}
