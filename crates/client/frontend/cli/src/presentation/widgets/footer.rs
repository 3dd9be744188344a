//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use scorekeeper_frontend_core::view_model::ViewModel;

/// Board keys while choosing a clue, wager keys while a wager is taken.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let line = if view_model.wager.is_some() {
        Line::from(vec![
            Span::raw("[0-9/-] Wager | "),
            Span::raw("[Bksp] Delete | "),
            Span::raw("[c/x] Correct/Incorrect | "),
            Span::raw("[r] Reset | "),
            Span::raw("[?] Help"),
        ])
    } else {
        Line::from(vec![
            Span::raw("[j/k] Move | "),
            Span::raw("[Enter/1-5] Open | "),
            Span::raw("[d] Daily Double | "),
            Span::raw("[c/x] Score | "),
            Span::raw("[s] Round | "),
            Span::raw("[f] Final | "),
            Span::raw("[?] Help | "),
            Span::raw("[q] Quit"),
        ])
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
