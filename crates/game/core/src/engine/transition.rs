//! Per-command transition rules.
//!
//! Every command runs pre_validate → apply → post_validate. `pre_validate`
//! checks preconditions against the state **before** mutation, `apply`
//! mutates, and `post_validate` checks the state invariants afterwards.

use crate::board;
use crate::command::Command;
use crate::config::GameConfig;
use crate::state::{GameState, Mode, Points, StateError};
use crate::wager::{self, WagerStatus};

use super::errors::CommandError;

/// Outcome of resolving a clue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerResult {
    pub correct: bool,
    /// Amount added or subtracted.
    pub stake: Points,
    pub score_before: Points,
    pub score_after: Points,
}

pub(super) fn pre_validate(
    command: &Command,
    state: &GameState,
    config: &GameConfig,
) -> Result<(), CommandError> {
    match command {
        Command::SelectAmount(amount) => {
            require_board(state)?;
            if let Some(open) = state.selected_amount {
                return Err(CommandError::AmountAlreadyOpen { amount: open });
            }
            require_on_board(state, config, *amount)
        }
        Command::MarkDailyDouble(amount) => {
            require_board(state)?;
            require_on_board(state, config, *amount)
        }
        Command::UpdateWager(_) => {
            if state.mode.is_wager_mode() {
                Ok(())
            } else {
                Err(CommandError::NotInWagerMode { mode: state.mode })
            }
        }
        Command::SubmitAnswer(_) => stake(state).map(|_| ()),
        Command::SwitchRound => {
            require_board(state)?;
            match state.selected_amount {
                Some(amount) => Err(CommandError::SelectionPending { amount }),
                None => Ok(()),
            }
        }
        Command::TriggerFinalJeopardy | Command::Reset => Ok(()),
    }
}

/// Applies `command`. Assumes `pre_validate` has already succeeded.
pub(super) fn apply(
    command: &Command,
    state: &mut GameState,
) -> Result<Option<AnswerResult>, CommandError> {
    match command {
        Command::SelectAmount(amount) => {
            state.selected_amount = Some(*amount);
        }
        Command::MarkDailyDouble(amount) => {
            state.clear_wager();
            state.selected_amount = Some(*amount);
            state.mode = Mode::DailyDouble;
        }
        Command::UpdateWager(text) => {
            let check = wager::validate(text, state.score);
            state.wager_text = text.clone();
            state.wager_error = check.error.map(str::to_string);
        }
        Command::SubmitAnswer(correct) => {
            return submit(state, *correct).map(Some);
        }
        Command::SwitchRound => {
            state.round = state.round.toggled();
            state.selected_amount = None;
            state.clear_wager();
            state.mode = Mode::Board;
        }
        Command::TriggerFinalJeopardy => {
            state.clear_wager();
            state.mode = Mode::FinalJeopardy;
            state.selected_amount = Some(GameConfig::FINAL_JEOPARDY_SENTINEL);
        }
        Command::Reset => {
            *state = GameState::new();
        }
    }
    Ok(None)
}

pub(super) fn post_validate(state: &GameState) -> Result<(), StateError> {
    state.check_invariants()
}

/// Amount at stake if the open clue were resolved now.
///
/// A typed wager takes precedence over the selected board amount. In wager
/// modes the wager is mandatory. A wager above the score is still a stake;
/// keeping it off the scoreboard is the frontend's job (see
/// [`ScoringEngine::can_submit`](super::ScoringEngine::can_submit)).
pub(super) fn stake(state: &GameState) -> Result<Points, CommandError> {
    if !state.wager_text.is_empty() {
        return match WagerStatus::of(&state.wager_text, state.score) {
            WagerStatus::Ready(value) | WagerStatus::ExceedsScore(value) => Ok(value),
            WagerStatus::Empty | WagerStatus::Unparsable => Err(CommandError::WagerUnparsable {
                text: state.wager_text.clone(),
            }),
        };
    }

    if state.mode.is_wager_mode() {
        return Err(CommandError::WagerRequired);
    }

    state.selected_amount.ok_or(CommandError::NothingToScore)
}

fn submit(state: &mut GameState, correct: bool) -> Result<AnswerResult, CommandError> {
    let stake = stake(state)?;
    let score_before = state.score;
    let score_after = if correct {
        score_before.checked_add(stake)
    } else {
        score_before.checked_sub(stake)
    }
    .ok_or(CommandError::ScoreOverflow {
        score: score_before,
        stake,
    })?;

    state.score = score_after;
    if correct {
        state.correct_count += 1;
    } else {
        state.incorrect_count += 1;
    }
    state.clear_wager();
    state.selected_amount = None;
    // Final Jeopardy stays active until reset.
    if state.mode == Mode::DailyDouble {
        state.mode = Mode::Board;
    }

    Ok(AnswerResult {
        correct,
        stake,
        score_before,
        score_after,
    })
}

fn require_board(state: &GameState) -> Result<(), CommandError> {
    if state.mode == Mode::Board {
        Ok(())
    } else {
        Err(CommandError::NotOnBoard { mode: state.mode })
    }
}

fn require_on_board(
    state: &GameState,
    config: &GameConfig,
    amount: Points,
) -> Result<(), CommandError> {
    if board::contains(config, state.round, amount) {
        Ok(())
    } else {
        Err(CommandError::AmountNotOnBoard {
            amount,
            round: state.round,
        })
    }
}
