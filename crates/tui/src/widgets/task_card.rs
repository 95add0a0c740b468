//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards with
//! color coding based on their status.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskdeck_protocol::{Task, TaskStatus};

/// Height of each task card in rows: name, description, due date, borders.
pub const TASK_CARD_HEIGHT: u16 = 5;

/// Returns the color associated with a task status.
///
/// This provides consistent color coding across the application:
///
/// - `Pending`: Yellow - waiting to be started
/// - `InProgress`: Blue - actively being worked on
/// - `Completed`: Green - done
/// - `Cancelled`: Red - abandoned
/// - `Unknown`: Magenta - the server sent a status this build does not know
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::TaskStatus;
/// use taskdeck_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(&TaskStatus::Pending), Color::Yellow);
/// assert_eq!(status_color(&TaskStatus::InProgress), Color::Blue);
/// assert_eq!(status_color(&TaskStatus::Completed), Color::Green);
/// assert_eq!(status_color(&TaskStatus::Cancelled), Color::Red);
/// ```
#[must_use]
pub const fn status_color(status: &TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Completed => Color::Green,
        TaskStatus::Cancelled => Color::Red,
        TaskStatus::Unknown(_) => Color::Magenta,
    }
}

/// Returns a brighter version of the status color for selected cards.
#[must_use]
const fn status_color_bright(status: &TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::LightYellow,
        TaskStatus::InProgress => Color::LightBlue,
        TaskStatus::Completed => Color::LightGreen,
        TaskStatus::Cancelled => Color::LightRed,
        TaskStatus::Unknown(_) => Color::LightMagenta,
    }
}

/// Formats a due date for display on the card.
#[must_use]
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    match due_date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "No due date".to_string(),
    }
}

/// Renders a task card to the buffer.
///
/// The card displays the task name, a truncated description, and the due
/// date within a bordered box. The border color reflects the task's status,
/// with brighter colors used for selected cards. The top-right corner shows
/// a `⋯` affordance for the card's action menu.
///
/// # Layout
///
/// ```text
/// +--------------- ⋯ +
/// | Name             |
/// | description...   |
/// | Dec 5, 2025      |
/// +------------------+
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 6 || area.height < 3 {
        return;
    }

    let base_color = status_color(&task.status);
    let (border_color, name_style, detail_style) = if is_selected {
        (
            status_color_bright(&task.status),
            Style::default()
                .fg(status_color_bright(&task.status))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            base_color,
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let name = truncate_string(&task.name, inner_width);
    let description = truncate_string(task.description.as_deref().unwrap_or(""), inner_width);

    let content = vec![
        Line::from(Span::styled(name, name_style)),
        Line::from(Span::styled(description, detail_style)),
        Line::from(Span::styled(format_due_date(task.due_date), detail_style)),
    ];

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    card.render(area, buf);

    // Menu affordance in the top border, right-aligned.
    let menu = menu_affordance_area(area);
    if let Some(cell) = buf.cell_mut((menu.x, menu.y)) {
        cell.set_symbol("⋯");
        cell.set_style(Style::default().fg(border_color));
    }
}

/// Returns the clickable `⋯` region of a card, used for mouse hit testing.
#[must_use]
pub fn menu_affordance_area(card: Rect) -> Rect {
    Rect::new(
        card.x + card.width.saturating_sub(3),
        card.y,
        3.min(card.width),
        1,
    )
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
