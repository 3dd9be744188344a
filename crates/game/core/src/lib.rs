//! Deterministic scoring rules for a quiz-show scorekeeper.
//!
//! `scorekeeper-core` defines the canonical rules (clue values, wager
//! validation, state transitions) and exposes pure APIs that every frontend
//! reuses. All state mutation flows through [`engine::ScoringEngine`], and
//! frontends depend on the types re-exported here.
pub mod board;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod wager;

pub use command::{Command, ParseCommandError};
pub use config::GameConfig;
pub use engine::{
    AnswerResult, CommandError, ExecuteError, ExecutionOutcome, ScoringEngine, TransitionPhase,
    TransitionPhaseError,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{GameState, Mode, Points, Round, StateError};
pub use wager::{WagerCheck, WagerStatus};
