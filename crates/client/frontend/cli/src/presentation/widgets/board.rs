//! Clue board widget: the five amounts of the active round.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
};
use scorekeeper_frontend_core::{presentation::PresentationMapper, view_model::ViewModel};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    cursor: usize,
    theme: &T,
) {
    let items: Vec<ListItem> = view_model
        .board
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let marker = if row.is_open { " <- open" } else { "" };
            let text = format!("[{}] {:>6}{}", index + 1, row.label, marker);
            ListItem::new(text).style(theme.style_board_row(row.is_open, index == cursor))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_model.round_label),
    );

    frame.render_widget(list, area);
}
