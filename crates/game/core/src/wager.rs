//! Wager validation.
//!
//! Turns the raw text typed into the wager field into a number and decides
//! whether it may be submitted. Validation never rejects the text itself; an
//! oversized wager is kept so the score-keeper can correct it.

use crate::config::GameConfig;
use crate::state::Points;

/// Result of validating a wager against the current score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerCheck {
    /// Parsed value, when the text is a whole number.
    pub value: Option<Points>,
    /// User-facing message, set only when the value exceeds the score.
    pub error: Option<&'static str>,
}

/// Classification of wager text shared by the engine and frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WagerStatus {
    /// No wager entered.
    Empty,
    /// Text is not a whole number.
    Unparsable,
    /// Parsed value is larger than the current score.
    ExceedsScore(Points),
    /// Parsed value may be submitted.
    Ready(Points),
}

impl WagerStatus {
    /// Classifies `raw` against `score`.
    pub fn of(raw: &str, score: Points) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match parse(raw) {
            None => Self::Unparsable,
            Some(value) if value > score => Self::ExceedsScore(value),
            Some(value) => Self::Ready(value),
        }
    }

    /// Value usable as a stake, if any.
    pub const fn ready(self) -> Option<Points> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Validates `raw` against `score`.
///
/// Negative wagers are accepted; no lower bound is enforced.
pub fn validate(raw: &str, score: Points) -> WagerCheck {
    match WagerStatus::of(raw, score) {
        WagerStatus::Empty | WagerStatus::Unparsable => WagerCheck {
            value: None,
            error: None,
        },
        WagerStatus::ExceedsScore(value) => WagerCheck {
            value: Some(value),
            error: Some(GameConfig::WAGER_EXCEEDS_SCORE),
        },
        WagerStatus::Ready(value) => WagerCheck {
            value: Some(value),
            error: None,
        },
    }
}

/// Parses a base-10 whole number, allowing surrounding whitespace and a sign.
pub fn parse(raw: &str) -> Option<Points> {
    raw.trim().parse::<Points>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_text_is_not_an_error() {
        assert_eq!(
            validate("", 0),
            WagerCheck {
                value: None,
                error: None
            }
        );
        assert_eq!(WagerStatus::of("", -500), WagerStatus::Empty);
    }

    #[test]
    fn oversized_wager_keeps_value_and_flags_error() {
        let check = validate("1500", 1000);
        assert_eq!(check.value, Some(1500));
        assert_eq!(check.error, Some("Cannot wager more than current score"));
    }

    #[test]
    fn wager_equal_to_score_is_allowed() {
        assert_eq!(WagerStatus::of("1000", 1000), WagerStatus::Ready(1000));
    }

    #[test]
    fn non_numeric_text_is_unparsable_without_message() {
        assert_eq!(WagerStatus::of("abc", 1000), WagerStatus::Unparsable);
        assert_eq!(WagerStatus::of("12abc", 1000), WagerStatus::Unparsable);
        assert_eq!(WagerStatus::of("1.5", 1000), WagerStatus::Unparsable);
        assert_eq!(validate("abc", 1000).error, None);
    }

    #[test]
    fn negative_wager_is_accepted() {
        assert_eq!(WagerStatus::of("-200", 100), WagerStatus::Ready(-200));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(parse(" 300 "), Some(300));
    }

    proptest! {
        #[test]
        fn error_iff_value_exceeds_score(wager in -10_000i64..10_000, score in -10_000i64..10_000) {
            let check = validate(&wager.to_string(), score);
            prop_assert_eq!(check.value, Some(wager));
            prop_assert_eq!(check.error.is_some(), wager > score);
        }

        #[test]
        fn empty_text_never_errors(score in any::<i64>()) {
            prop_assert!(validate("", score).error.is_none());
        }
    }
}
