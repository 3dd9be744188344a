//! Score and answer tallies.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use scorekeeper_frontend_core::{presentation::PresentationMapper, view_model::ViewModel};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                view_model.score_label.clone(),
                theme.style_score(view_model.score),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Correct:   "),
            Span::styled(
                view_model.correct.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Incorrect: "),
            Span::styled(
                view_model.incorrect.to_string(),
                Style::default().fg(Color::LightRed),
            ),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Scoreboard"));

    frame.render_widget(paragraph, area);
}
