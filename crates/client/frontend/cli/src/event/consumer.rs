//! Maintains the CLI message log in response to engine outcomes.
use scorekeeper_core::{Command, ExecuteError, ExecutionOutcome, GameError};
use scorekeeper_frontend_core::{
    MessageConfig,
    event::{EventConsumer, EventImpact},
    format::{describe_outcome, describe_rejection},
    message::{MessageEntry, MessageLevel, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
    config: MessageConfig,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog, config: MessageConfig) -> Self {
        Self { log, config }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_outcome(&mut self, command: &Command, outcome: &ExecutionOutcome) -> EventImpact {
        let state = &outcome.state;
        tracing::debug!(
            command = %command,
            score = state.score,
            mode = %state.mode,
            "Command applied"
        );

        // Wager edits arrive once per keystroke.
        if matches!(command, Command::UpdateWager(_)) && !self.config.show_wager_updates {
            return EventImpact::redraw();
        }

        if matches!(command, Command::Reset) {
            self.log.clear();
        }

        self.log.push(MessageEntry::new(
            describe_outcome(command, outcome),
            Some(state.answered()),
            MessageLevel::Info,
        ));
        EventImpact::redraw()
    }

    fn on_rejected(&mut self, command: &Command, error: &ExecuteError) -> EventImpact {
        let severity = error.severity();
        let level = if severity.is_internal() {
            tracing::error!(
                command = %command,
                severity = severity.as_str(),
                code = error.error_code(),
                "{}",
                error
            );
            MessageLevel::Error
        } else {
            tracing::warn!(
                command = %command,
                severity = severity.as_str(),
                code = error.error_code(),
                "{}",
                error
            );
            MessageLevel::Warning
        };

        self.log
            .push(MessageEntry::new(describe_rejection(error), None, level));
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeeper_core::ScoringEngine;

    fn consumer(show_wager_updates: bool) -> CliEventConsumer {
        CliEventConsumer::new(
            MessageLog::new(8),
            MessageConfig {
                capacity: 8,
                show_wager_updates,
            },
        )
    }

    #[test]
    fn logs_scored_answer_with_tally() {
        let mut engine = ScoringEngine::new();
        let mut consumer = consumer(false);
        engine.select_amount(200).unwrap();

        let command = Command::SubmitAnswer(true);
        let outcome = engine.execute(&command).unwrap();
        assert!(consumer.on_outcome(&command, &outcome).requires_redraw);

        let entry = consumer.message_log().recent(1).next().cloned().unwrap();
        assert_eq!(entry.text, "Correct! +$200 (score $200)");
        assert_eq!(entry.answered, Some(1));
        assert_eq!(entry.level, MessageLevel::Info);
    }

    #[test]
    fn hides_wager_keystrokes_by_default() {
        let mut engine = ScoringEngine::new();
        engine.trigger_final_jeopardy().unwrap();
        let command = Command::UpdateWager("0".into());
        let outcome = engine.execute(&command).unwrap();

        let mut quiet = consumer(false);
        quiet.on_outcome(&command, &outcome);
        assert!(quiet.message_log().is_empty());

        let mut verbose = consumer(true);
        verbose.on_outcome(&command, &outcome);
        assert_eq!(verbose.message_log().len(), 1);
    }

    #[test]
    fn reset_starts_a_fresh_log() {
        let mut engine = ScoringEngine::new();
        let mut consumer = consumer(false);
        consumer.message_log_mut().push_text("Ready.");

        let command = Command::Reset;
        let outcome = engine.execute(&command).unwrap();
        consumer.on_outcome(&command, &outcome);

        let texts: Vec<_> = consumer.message_log().iter().map(|m| m.text.clone()).collect();
        assert_eq!(texts, ["New game: scores reset"]);
    }

    #[test]
    fn logs_rejection_as_warning() {
        let mut engine = ScoringEngine::new();
        let mut consumer = consumer(false);
        let command = Command::SubmitAnswer(false);
        let error = engine.execute(&command).unwrap_err();

        consumer.on_rejected(&command, &error);
        let log = consumer.take_message_log();
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.text, "No amount is open");
        assert_eq!(entry.level, MessageLevel::Warning);
    }
}
