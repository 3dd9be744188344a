//! Utilities for reacting to engine outcomes inside UI layers.
use scorekeeper_core::{Command, ExecuteError, ExecutionOutcome};

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

/// Receives every command result the frontend dispatches to the engine.
pub trait EventConsumer {
    fn on_outcome(&mut self, command: &Command, outcome: &ExecutionOutcome) -> EventImpact;
    fn on_rejected(&mut self, command: &Command, error: &ExecuteError) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}
