//! Command execution pipeline.
//!
//! The [`ScoringEngine`] is the authoritative owner of [`GameState`]. Every
//! mutation flows through [`ScoringEngine::execute`], which runs the command
//! against a working copy and only commits it once all three phases succeed.
//! A failed command therefore never changes the state.

mod errors;
mod transition;

pub use errors::{CommandError, ExecuteError, TransitionPhase, TransitionPhaseError};
pub use transition::AnswerResult;

use crate::board;
use crate::command::Command;
use crate::config::GameConfig;
use crate::state::{GameState, Points};
use crate::wager::WagerStatus;

/// Complete outcome of command execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Snapshot of the state after the command.
    pub state: GameState,

    /// Scoring result. `None` for commands other than `SubmitAnswer`.
    pub answer: Option<AnswerResult>,
}

/// Scoring engine owning the session state.
pub struct ScoringEngine {
    config: GameConfig,
    state: GameState,
}

impl ScoringEngine {
    /// Creates an engine at the session start state.
    pub fn new() -> Self {
        Self::with_config(GameConfig::new())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ordered clue amounts for the active round.
    pub fn clue_values(&self) -> [Points; GameConfig::BOARD_ROWS] {
        board::values_with(&self.config, self.state.round)
    }

    /// Classification of the in-progress wager against the current score.
    pub fn wager_status(&self) -> WagerStatus {
        WagerStatus::of(&self.state.wager_text, self.state.score)
    }

    /// Returns true when Correct/Incorrect should be offered.
    ///
    /// Stricter than what [`execute`](Self::execute) accepts: a wager above
    /// the score carries a validation message and is not offered, although
    /// `SubmitAnswer` would still apply it.
    pub fn can_submit(&self) -> bool {
        self.state.wager_error.is_none() && transition::stake(&self.state).is_ok()
    }

    /// Executes a command through the transition pipeline.
    ///
    /// Returns the new snapshot, or the reason the command was refused. On
    /// error the state is exactly what it was before the call.
    pub fn execute(&mut self, command: &Command) -> Result<ExecutionOutcome, ExecuteError> {
        let name = command.name();

        transition::pre_validate(command, &self.state, &self.config)
            .map_err(|e| ExecuteError::rejected(name, TransitionPhase::PreValidate, e))?;

        let mut next = self.state.clone();
        let answer = transition::apply(command, &mut next)
            .map_err(|e| ExecuteError::rejected(name, TransitionPhase::Apply, e))?;

        transition::post_validate(&next).map_err(|e| ExecuteError::invariant(name, e))?;

        self.state = next;
        Ok(ExecutionOutcome {
            state: self.state.clone(),
            answer,
        })
    }

    pub fn select_amount(&mut self, amount: Points) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::SelectAmount(amount))
    }

    pub fn mark_daily_double(&mut self, amount: Points) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::MarkDailyDouble(amount))
    }

    pub fn update_wager(
        &mut self,
        raw_text: impl Into<String>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::UpdateWager(raw_text.into()))
    }

    pub fn submit_answer(&mut self, is_correct: bool) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::SubmitAnswer(is_correct))
    }

    pub fn switch_round(&mut self) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::SwitchRound)
    }

    pub fn trigger_final_jeopardy(&mut self) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::TriggerFinalJeopardy)
    }

    pub fn reset(&mut self) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(&Command::Reset)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
