//! Key-binding help overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BOARD_KEYS: &[(&str, &str)] = &[
    ("Up/Down, j/k", "Move the board cursor"),
    ("Enter/Space", "Open the amount under the cursor"),
    ("1-5", "Open a row directly"),
    ("d", "Mark the cursor row as Daily Double"),
    ("c/y", "Correct"),
    ("x/n", "Incorrect"),
    ("s", "Switch round"),
    ("f", "Final Jeopardy"),
    ("r", "Reset the game"),
    ("q/Esc", "Quit"),
];

const WAGER_KEYS: &[(&str, &str)] = &[
    ("0-9, -", "Type the wager"),
    ("Backspace", "Delete the last character"),
    ("c/x", "Score the wager"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan);

    let mut lines = vec![Line::from(Span::styled("Board", heading))];
    lines.extend(BOARD_KEYS.iter().map(|(keys, what)| key_line(keys, what, key_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Wager", heading)));
    lines.extend(WAGER_KEYS.iter().map(|(keys, what)| key_line(keys, what, key_style)));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys (? or Esc to close) "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn key_line<'a>(keys: &'a str, what: &'a str, key_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{keys:<14}"), key_style),
        Span::raw(what),
    ])
}
