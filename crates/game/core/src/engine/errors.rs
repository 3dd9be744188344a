//! Error types for the command execution pipeline.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Mode, Points, Round, StateError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Reasons a command does not apply to the current state.
///
/// A rejected command leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("only available on the board (current mode: {mode})")]
    NotOnBoard { mode: Mode },

    #[error("no wager is being taken (current mode: {mode})")]
    NotInWagerMode { mode: Mode },

    #[error("${amount} is already open; answer it first")]
    AmountAlreadyOpen { amount: Points },

    #[error("${amount} is not on the {round} board")]
    AmountNotOnBoard { amount: Points, round: Round },

    #[error("cannot switch rounds while ${amount} is open")]
    SelectionPending { amount: Points },

    #[error("no amount is open")]
    NothingToScore,

    #[error("enter a wager first")]
    WagerRequired,

    #[error("wager {text:?} is not a whole number")]
    WagerUnparsable { text: String },

    #[error("score {score} cannot absorb a change of {stake}")]
    ScoreOverflow { score: Points, stake: Points },
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CommandError::*;
        match self {
            NotOnBoard { .. } => "CMD_NOT_ON_BOARD",
            NotInWagerMode { .. } => "CMD_NOT_IN_WAGER_MODE",
            AmountAlreadyOpen { .. } => "CMD_AMOUNT_ALREADY_OPEN",
            AmountNotOnBoard { .. } => "CMD_AMOUNT_NOT_ON_BOARD",
            SelectionPending { .. } => "CMD_SELECTION_PENDING",
            NothingToScore => "CMD_NOTHING_TO_SCORE",
            WagerRequired => "CMD_WAGER_REQUIRED",
            WagerUnparsable { .. } => "CMD_WAGER_UNPARSABLE",
            ScoreOverflow { .. } => "CMD_SCORE_OVERFLOW",
        }
    }
}

/// Errors surfaced while executing a command through the scoring engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{command} rejected: {source}")]
    Rejected {
        command: &'static str,
        source: TransitionPhaseError<CommandError>,
    },

    #[error("{command} broke a state invariant: {source}")]
    InvariantViolated {
        command: &'static str,
        source: TransitionPhaseError<StateError>,
    },
}

impl ExecuteError {
    pub(crate) fn rejected(command: &'static str, phase: TransitionPhase, error: CommandError) -> Self {
        Self::Rejected {
            command,
            source: TransitionPhaseError::new(phase, error),
        }
    }

    pub(crate) fn invariant(command: &'static str, error: StateError) -> Self {
        Self::InvariantViolated {
            command,
            source: TransitionPhaseError::new(TransitionPhase::PostValidate, error),
        }
    }

    /// Pipeline phase that produced the error.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Rejected { source, .. } => source.phase,
            Self::InvariantViolated { source, .. } => source.phase,
        }
    }

    /// The rejection reason, if the command was rejected.
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            Self::Rejected { source, .. } => Some(&source.error),
            Self::InvariantViolated { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected { source, .. } => source.error.severity(),
            Self::InvariantViolated { source, .. } => source.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { source, .. } => source.error.error_code(),
            Self::InvariantViolated { source, .. } => source.error.error_code(),
        }
    }
}
