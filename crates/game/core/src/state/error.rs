//! State invariant errors.
//!
//! Raised by the engine's post-validation phase when a transition leaves the
//! session in a configuration that should be unreachable.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Mode, Points};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Board mode never carries a typed wager.
    #[error("wager text {text:?} present outside a wager mode")]
    WagerOutsideWagerMode { text: String },

    /// The stored wager error disagrees with the validator.
    #[error("wager error out of sync for {text:?} at score {score} (stored error: {has_error})")]
    WagerErrorOutOfSync {
        text: String,
        score: Points,
        has_error: bool,
    },

    #[error("{mode} mode requires a selected amount")]
    MissingSelection { mode: Mode },

    #[error("{mode} mode cannot hold board amount {amount}")]
    UnexpectedSelection { mode: Mode, amount: Points },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            WagerOutsideWagerMode { .. } => "STATE_WAGER_OUTSIDE_WAGER_MODE",
            WagerErrorOutOfSync { .. } => "STATE_WAGER_ERROR_OUT_OF_SYNC",
            MissingSelection { .. } => "STATE_MISSING_SELECTION",
            UnexpectedSelection { .. } => "STATE_UNEXPECTED_SELECTION",
        }
    }
}
