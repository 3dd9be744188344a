//! Wager entry panel for Daily Double and Final Jeopardy.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use scorekeeper_frontend_core::{
    format,
    presentation::PresentationMapper,
    view_model::{ViewModel, WagerPanel},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    panel: &WagerPanel,
    view_model: &ViewModel,
    theme: &T,
) {
    let entry = if panel.text.is_empty() {
        Span::styled(panel.hint.clone(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(panel.text.clone(), theme.style_wager(panel.status))
    };

    let mut lines = vec![
        Line::from(vec![Span::raw("Wager: "), entry, Span::raw("_")]),
        Line::from(""),
    ];

    if let Some(amount) = view_model.selected_amount.filter(|amount| *amount > 0) {
        lines.push(Line::from(format!("Clue value: {}", format::money(amount))));
    }

    if let Some(error) = &panel.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::LightRed),
        )));
    }

    let prompt = if view_model.can_submit {
        "[c] Correct  [x] Incorrect"
    } else {
        "Enter a wager to score"
    };
    lines.push(Line::from(Span::styled(
        prompt,
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(panel.title, theme.style_mode(view_model.mode))),
    );

    frame.render_widget(paragraph, area);
}
