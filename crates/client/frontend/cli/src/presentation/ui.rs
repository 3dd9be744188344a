//! UI rendering with ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use scorekeeper_frontend_core::{message::MessageLog, view_model::ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the terminal UI using ViewModel and widget system.
///
/// Overlay modes (help) are drawn on top of the scoring screen.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        render_scoring_ui(frame, ctx, &theme);

        if ctx.app_state.mode.is_overlay() {
            render_overlay_mode(frame, ctx);
        }
    })?;

    Ok(())
}

fn render_overlay_mode(frame: &mut ratatui::Frame, ctx: &RenderContext) {
    match ctx.app_state.mode {
        AppMode::Help => {
            let area = centered_rect(60, 70, frame.area());
            widgets::help::render(frame, area);
        }
        AppMode::Normal => {}
    }
}

/// Header, board or wager panel beside the scoreboard, messages, footer.
fn render_scoring_ui(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(7),                           // Board / wager + scoreboard
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(3),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    match &ctx.view_model.wager {
        Some(panel) => widgets::wager::render(frame, body[0], panel, ctx.view_model, theme),
        None => widgets::board::render(frame, body[0], ctx.view_model, ctx.app_state.cursor, theme),
    }
    widgets::scoreboard::render(frame, body[1], ctx.view_model, theme);

    // Two lines go to the borders.
    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent_messages: Vec<_> = ctx.messages.recent(visible).cloned().collect();
    widgets::messages::render(
        frame,
        chunks[2],
        &recent_messages,
        ctx.message_panel_height,
        theme,
    );

    widgets::footer::render(frame, chunks[3], ctx.view_model);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
