//! Text formatting shared by every frontend.

use scorekeeper_core::{Command, ExecuteError, ExecutionOutcome, Points};

/// Formats points as a dollar amount: `$400`, `-$100`.
pub fn money(points: Points) -> String {
    if points < 0 {
        format!("-${}", points.unsigned_abs())
    } else {
        format!("${points}")
    }
}

/// Formats a score change with an explicit sign: `+$400`, `-$500`, `$0`.
pub fn signed_money(delta: Points) -> String {
    if delta > 0 {
        format!("+{}", money(delta))
    } else {
        money(delta)
    }
}

/// Placeholder shown in the wager field.
pub fn wager_hint(score: Points) -> String {
    format!("Max wager: {}", money(score))
}

/// One-line description of a successful command, for message logs.
pub fn describe_outcome(command: &Command, outcome: &ExecutionOutcome) -> String {
    let state = &outcome.state;
    match command {
        Command::SelectAmount(amount) => format!("Opened {}", money(*amount)),
        Command::MarkDailyDouble(amount) => format!(
            "Daily Double on {}! {}",
            money(*amount),
            wager_hint(state.score)
        ),
        Command::UpdateWager(text) if text.is_empty() => "Wager cleared".to_string(),
        Command::UpdateWager(text) => match &state.wager_error {
            Some(error) => format!("Wager {text}: {error}"),
            None => format!("Wager {text}"),
        },
        Command::SubmitAnswer(_) => match &outcome.answer {
            Some(answer) => {
                let delta = answer.score_after.saturating_sub(answer.score_before);
                format!(
                    "{} {} (score {})",
                    if answer.correct { "Correct!" } else { "Incorrect." },
                    signed_money(delta),
                    money(answer.score_after)
                )
            }
            None => format!("Score {}", money(state.score)),
        },
        Command::SwitchRound => format!("Now playing {}", state.round),
        Command::TriggerFinalJeopardy => {
            format!("Final Jeopardy! {}", wager_hint(state.score))
        }
        Command::Reset => "New game: scores reset".to_string(),
    }
}

/// One-line description of a refused command.
pub fn describe_rejection(error: &ExecuteError) -> String {
    match error.command_error() {
        Some(reason) => capitalize(&reason.to_string()),
        None => error.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeeper_core::ScoringEngine;

    #[test]
    fn formats_money() {
        assert_eq!(money(400), "$400");
        assert_eq!(money(-100), "-$100");
        assert_eq!(money(0), "$0");
        assert_eq!(signed_money(400), "+$400");
        assert_eq!(signed_money(-500), "-$500");
    }

    #[test]
    fn describes_scored_answer() {
        let mut engine = ScoringEngine::new();
        engine.select_amount(400).unwrap();
        let command = Command::SubmitAnswer(false);
        let outcome = engine.execute(&command).unwrap();
        assert_eq!(
            describe_outcome(&command, &outcome),
            "Incorrect. -$400 (score -$400)"
        );
    }

    #[test]
    fn describes_final_jeopardy_with_hint() {
        let mut engine = ScoringEngine::new();
        let command = Command::TriggerFinalJeopardy;
        let outcome = engine.execute(&command).unwrap();
        assert_eq!(
            describe_outcome(&command, &outcome),
            "Final Jeopardy! Max wager: $0"
        );
    }

    #[test]
    fn describes_rejection_reason() {
        let mut engine = ScoringEngine::new();
        let error = engine.submit_answer(true).unwrap_err();
        assert_eq!(describe_rejection(&error), "No amount is open");
    }
}
