//! Commands accepted by the scoring engine.
//!
//! Each variant corresponds to one score-keeper action. Commands also have a
//! short textual form used by line-oriented frontends:
//!
//! | Text | Command |
//! |---|---|
//! | `select <amount>` | [`Command::SelectAmount`] |
//! | `dd <amount>` / `daily-double <amount>` | [`Command::MarkDailyDouble`] |
//! | `wager [text]` | [`Command::UpdateWager`] |
//! | `correct` / `incorrect` | [`Command::SubmitAnswer`] |
//! | `round` | [`Command::SwitchRound`] |
//! | `final` | [`Command::TriggerFinalJeopardy`] |
//! | `reset` | [`Command::Reset`] |

use core::fmt;
use core::str::FromStr;

use crate::state::Points;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Open a board amount for plain scoring.
    SelectAmount(Points),
    /// Open a board amount as a Daily Double.
    MarkDailyDouble(Points),
    /// Replace the in-progress wager text.
    UpdateWager(String),
    /// Resolve the open clue; `true` for a correct answer.
    SubmitAnswer(bool),
    SwitchRound,
    TriggerFinalJeopardy,
    Reset,
}

impl Command {
    /// Short, stable name used in logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectAmount(_) => "select_amount",
            Self::MarkDailyDouble(_) => "mark_daily_double",
            Self::UpdateWager(_) => "update_wager",
            Self::SubmitAnswer(_) => "submit_answer",
            Self::SwitchRound => "switch_round",
            Self::TriggerFinalJeopardy => "trigger_final_jeopardy",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectAmount(amount) => write!(f, "select {amount}"),
            Self::MarkDailyDouble(amount) => write!(f, "dd {amount}"),
            Self::UpdateWager(text) if text.is_empty() => f.write_str("wager"),
            Self::UpdateWager(text) => write!(f, "wager {text}"),
            Self::SubmitAnswer(true) => f.write_str("correct"),
            Self::SubmitAnswer(false) => f.write_str("incorrect"),
            Self::SwitchRound => f.write_str("round"),
            Self::TriggerFinalJeopardy => f.write_str("final"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

/// Errors produced while parsing the textual command form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("command '{command}' expects an amount")]
    MissingAmount { command: &'static str },

    #[error("invalid amount '{value}' for command '{command}'")]
    InvalidAmount {
        command: &'static str,
        value: String,
    },

    #[error("command '{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "select" => parse_amount("select", rest).map(Command::SelectAmount),
            "dd" | "daily-double" => parse_amount("dd", rest).map(Command::MarkDailyDouble),
            // The wager keeps its raw text; validation happens in the engine.
            "wager" => Ok(Command::UpdateWager(rest.to_string())),
            "correct" => no_args("correct", rest, Command::SubmitAnswer(true)),
            "incorrect" => no_args("incorrect", rest, Command::SubmitAnswer(false)),
            "round" => no_args("round", rest, Command::SwitchRound),
            "final" => no_args("final", rest, Command::TriggerFinalJeopardy),
            "reset" => no_args("reset", rest, Command::Reset),
            _ => Err(ParseCommandError::Unknown(verb.to_string())),
        }
    }
}

fn parse_amount(command: &'static str, raw: &str) -> Result<Points, ParseCommandError> {
    if raw.is_empty() {
        return Err(ParseCommandError::MissingAmount { command });
    }
    raw.parse().map_err(|_| ParseCommandError::InvalidAmount {
        command,
        value: raw.to_string(),
    })
}

fn no_args(command: &'static str, rest: &str, parsed: Command) -> Result<Command, ParseCommandError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseCommandError::UnexpectedArgument { command })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        assert_eq!("select 400".parse::<Command>(), Ok(Command::SelectAmount(400)));
        assert_eq!("dd 600".parse::<Command>(), Ok(Command::MarkDailyDouble(600)));
        assert_eq!("daily-double 600".parse::<Command>(), Ok(Command::MarkDailyDouble(600)));
        assert_eq!("wager 500".parse::<Command>(), Ok(Command::UpdateWager("500".into())));
        assert_eq!("correct".parse::<Command>(), Ok(Command::SubmitAnswer(true)));
        assert_eq!("incorrect".parse::<Command>(), Ok(Command::SubmitAnswer(false)));
        assert_eq!("round".parse::<Command>(), Ok(Command::SwitchRound));
        assert_eq!("final".parse::<Command>(), Ok(Command::TriggerFinalJeopardy));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
    }

    #[test]
    fn verbs_are_case_insensitive_and_trimmed() {
        assert_eq!("  SELECT   200 ".parse::<Command>(), Ok(Command::SelectAmount(200)));
    }

    #[test]
    fn bare_wager_clears_text() {
        assert_eq!("wager".parse::<Command>(), Ok(Command::UpdateWager(String::new())));
    }

    #[test]
    fn wager_keeps_raw_text() {
        assert_eq!(
            "wager 12abc".parse::<Command>(),
            Ok(Command::UpdateWager("12abc".into()))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "select".parse::<Command>(),
            Err(ParseCommandError::MissingAmount { command: "select" })
        );
        assert!(matches!(
            "select lots".parse::<Command>(),
            Err(ParseCommandError::InvalidAmount { .. })
        ));
        assert_eq!(
            "reset now".parse::<Command>(),
            Err(ParseCommandError::UnexpectedArgument { command: "reset" })
        );
        assert!(matches!(
            "buzz".parse::<Command>(),
            Err(ParseCommandError::Unknown(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let commands = [
            Command::SelectAmount(800),
            Command::UpdateWager("250".into()),
            Command::SubmitAnswer(false),
            Command::TriggerFinalJeopardy,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}
