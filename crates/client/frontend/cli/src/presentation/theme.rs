//! Ratatui theme implementation of PresentationMapper.

use ratatui::style::{Color, Modifier, Style};
use scorekeeper_core::{Mode, Points, WagerStatus};
use scorekeeper_frontend_core::{message::MessageLevel, presentation::PresentationMapper};

/// Ratatui-specific theme implementing PresentationMapper.
///
/// Board colors follow the show: blue panels, gold amounts.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_score(&self, score: Points) -> Self::Style {
        let color = match score {
            s if s > 0 => Color::Green,
            0 => Color::White,
            _ => Color::LightRed,
        };
        self.emphasize_current(Style::default().fg(color))
    }

    fn style_mode(&self, mode: Mode) -> Self::Style {
        let color = match mode {
            Mode::Board => Color::LightBlue,
            Mode::DailyDouble => Color::Yellow,
            Mode::FinalJeopardy => Color::Magenta,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn style_board_row(&self, is_open: bool, is_cursor: bool) -> Self::Style {
        let base = if is_open {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow).bg(Color::Blue)
        };

        if is_cursor {
            self.emphasize_current(base).add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    fn style_wager(&self, status: WagerStatus) -> Self::Style {
        match status {
            WagerStatus::Empty => Style::default().fg(Color::DarkGray),
            WagerStatus::Unparsable => Style::default().fg(Color::Yellow),
            WagerStatus::ExceedsScore(_) => Style::default().fg(Color::LightRed),
            WagerStatus::Ready(_) => Style::default().fg(Color::Green),
        }
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
