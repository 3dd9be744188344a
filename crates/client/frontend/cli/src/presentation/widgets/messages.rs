//! Messages widget displaying recent outcomes and rejections.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};
use scorekeeper_frontend_core::{message::MessageEntry, presentation::PresentationMapper};

/// Render the message log panel.
///
/// `messages` arrive newest first and are drawn bottom-to-top, so the newest
/// line sits at the bottom.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &[MessageEntry],
    panel_height: u16,
    theme: &T,
) {
    let visible = panel_height.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    // Pad with empty lines to maintain consistent height
    while items.len() < visible {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with the answered-clue count, when known.
fn format_message(entry: &MessageEntry) -> String {
    match entry.answered {
        Some(answered) => format!("[{}] {}", answered, entry.text),
        None => entry.text.clone(),
    }
}
