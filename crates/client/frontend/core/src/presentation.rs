//! Framework-agnostic styling interface.
//!
//! Each UI toolkit implements [`PresentationMapper`] with its own style type
//! so widgets can ask "how should a negative score look" without hard-coding
//! colors.

use scorekeeper_core::{Mode, Points, WagerStatus};

use crate::message::MessageLevel;

pub trait PresentationMapper {
    type Style;

    fn style_score(&self, score: Points) -> Self::Style;

    fn style_mode(&self, mode: Mode) -> Self::Style;

    /// Style for a board row. `is_open` marks the amount awaiting an answer,
    /// `is_cursor` the row under the keyboard cursor.
    fn style_board_row(&self, is_open: bool, is_cursor: bool) -> Self::Style;

    fn style_wager(&self, status: WagerStatus) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style;
}
