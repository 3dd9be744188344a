//! Header widget displaying the round and current mode.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use scorekeeper_core::Mode;
use scorekeeper_frontend_core::{presentation::PresentationMapper, view_model::ViewModel};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let mut spans = vec![
        Span::raw("Round: "),
        Span::styled(
            view_model.round_label,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if view_model.mode != Mode::Board {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            view_model.mode.to_string(),
            theme.style_mode(view_model.mode),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Scorekeeper"));

    frame.render_widget(paragraph, area);
}
