//! Clue value table.
//!
//! Pure lookup from round to the ordered amounts the board offers.

use crate::config::GameConfig;
use crate::state::{Points, Round};

/// Ordered clue amounts for `round` under the default configuration.
pub fn values(round: Round) -> [Points; GameConfig::BOARD_ROWS] {
    values_with(&GameConfig::new(), round)
}

/// Ordered clue amounts for `round`, top row first.
pub fn values_with(config: &GameConfig, round: Round) -> [Points; GameConfig::BOARD_ROWS] {
    let multiplier = round.multiplier(config);
    config.base_values.map(|value| value * multiplier)
}

/// Returns true if `amount` is offered on the board in `round`.
pub fn contains(config: &GameConfig, round: Round, amount: Points) -> bool {
    values_with(config, round).contains(&amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_round_values() {
        assert_eq!(values(Round::Single), [200, 400, 600, 800, 1000]);
    }

    #[test]
    fn double_round_doubles_every_value() {
        let single = values(Round::Single);
        let double = values(Round::Double);
        assert_eq!(double, [400, 800, 1200, 1600, 2000]);
        for (s, d) in single.iter().zip(double.iter()) {
            assert_eq!(*d, 2 * *s);
        }
    }

    #[test]
    fn contains_respects_round() {
        let config = GameConfig::new();
        assert!(contains(&config, Round::Single, 600));
        assert!(!contains(&config, Round::Double, 600));
        assert!(contains(&config, Round::Double, 1200));
        assert!(!contains(&config, Round::Single, 0));
    }
}
