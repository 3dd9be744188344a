use crate::state::Points;

/// Scoring constants shared by the clue table and the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Face values of the board in the Single round, top row first.
    pub base_values: [Points; GameConfig::BOARD_ROWS],
    /// Factor applied to every face value in the Double round.
    pub double_multiplier: Points,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of clue rows on the board.
    pub const BOARD_ROWS: usize = 5;
    pub const BASE_CLUE_VALUES: [Points; Self::BOARD_ROWS] = [200, 400, 600, 800, 1000];
    pub const DOUBLE_ROUND_MULTIPLIER: Points = 2;

    /// Message surfaced while a wager exceeds the current score.
    pub const WAGER_EXCEEDS_SCORE: &'static str = "Cannot wager more than current score";

    /// Selected-amount sentinel while Final Jeopardy is active.
    pub const FINAL_JEOPARDY_SENTINEL: Points = 0;

    pub const fn new() -> Self {
        Self {
            base_values: Self::BASE_CLUE_VALUES,
            double_multiplier: Self::DOUBLE_ROUND_MULTIPLIER,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
