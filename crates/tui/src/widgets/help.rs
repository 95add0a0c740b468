//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available
//! keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 22;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, with the area
/// behind it cleared first.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let help_text = Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(key, key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        entry("  ←/h        ", "Previous column"),
        entry("  →/l        ", "Next column"),
        entry("  ↑/k        ", "Select previous task"),
        entry("  ↓/j        ", "Select next task"),
        Line::from(""),
        Line::from(Span::styled("  Tasks", header_style)),
        entry("  a          ", "Add task"),
        entry("  e          ", "Edit selected"),
        entry("  d          ", "Delete selected"),
        entry("  Enter      ", "Grab / drop task"),
        entry("  m          ", "Task menu"),
        entry("  s          ", "Sort by due date"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        entry("  r          ", "Refresh"),
        entry("  q / Ctrl+C ", "Quit"),
        entry("  ?          ", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}
