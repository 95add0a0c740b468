//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers, task lists, and the per-card action menu. The layout
//! helpers are shared with mouse hit testing so the pointer and the
//! renderer always agree on where each card is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use taskdeck_protocol::Column;

use super::task_card::{TASK_CARD_HEIGHT, render_task_card};
use crate::column_state::ColumnState;

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - left border with rounded corners.
    First,
    /// Middle columns - left border with T-connectors.
    Middle,
    /// Last (rightmost) column - both borders, rounded on right.
    Last,
}

/// Border set for the first (leftmost) column: rounded on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// An entry in a card's action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Open the edit form for the card.
    Edit,
    /// Delete the card.
    Delete,
}

/// Width of the action menu overlay.
const MENU_WIDTH: u16 = 12;

/// Height of the action menu overlay: two items plus borders.
const MENU_HEIGHT: u16 = 4;

/// Renders a single column to the buffer.
///
/// A column displays its header (bucket name and task count) followed by a
/// vertical list of task cards. Empty columns show a "No tasks" placeholder.
/// A column a drag is hovering over gets a highlighted border; an open card
/// menu is drawn last, over the cards.
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    column: &Column,
    ui: &ColumnState,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    // Drag-over takes precedence over focus for the border color.
    let border_style = if ui.is_drag_over() {
        Style::default().fg(Color::Green)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!("{} ({})", column.bucket.display_name(), column.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent columns: only the last column
    // carries its own right border, every other column borrows it from
    // the neighbor.
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last => Borders::ALL,
    };
    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    // The shared left border was drawn gray; recolor it when the previous
    // column is the focused one.
    if prev_focused && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner, buf);
        return;
    }

    for (task_idx, card_area) in layout_cards(area, position, column.len(), selected_idx) {
        let Some(task) = column.tasks.get(task_idx) else {
            break;
        };
        let is_selected = is_focused && selected_idx == Some(task_idx);
        render_task_card(task, is_selected, card_area, buf);
    }

    // Menu overlay on top of the cards, anchored to its card when visible.
    if let Some(open_id) = ui.open_menu()
        && let Some(card) = layout_cards(area, position, column.len(), selected_idx)
            .into_iter()
            .find_map(|(task_idx, card_area)| {
                (column.tasks.get(task_idx)?.id == *open_id).then_some(card_area)
            })
    {
        render_menu(card, area, buf);
    }
}

/// Computes the visible card slots for a column.
///
/// Returns `(task_index, area)` pairs for every card that fits in the
/// column, already offset by the scroll needed to keep the selection
/// visible. Both the renderer and mouse hit testing use this, so a click
/// always lands on the card being displayed.
#[must_use]
pub fn layout_cards(
    area: Rect,
    position: ColumnPosition,
    task_count: usize,
    selected_idx: Option<usize>,
) -> Vec<(usize, Rect)> {
    let inner = inner_area(area, position);
    if inner.height < TASK_CARD_HEIGHT || inner.width == 0 {
        return Vec::new();
    }

    let visible = ((inner.height / TASK_CARD_HEIGHT).max(1)) as usize;
    let scroll = calculate_scroll_offset(selected_idx, task_count, visible);

    (0..visible.min(task_count.saturating_sub(scroll)))
        .map(|slot| {
            let task_idx = scroll + slot;
            let y = inner.y + (slot as u16) * TASK_CARD_HEIGHT;
            (task_idx, Rect::new(inner.x, y, inner.width, TASK_CARD_HEIGHT))
        })
        .collect()
}

/// The column area inside its borders, mirroring the block the renderer
/// builds (no right border except on the last column).
fn inner_area(area: Rect, position: ColumnPosition) -> Rect {
    let right = match position {
        ColumnPosition::Last => 2,
        _ => 1,
    };
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(right),
        area.height.saturating_sub(2),
    )
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}

/// Returns the area the action menu occupies for a card, clamped into
/// `bounds`. Shared with mouse hit testing.
#[must_use]
pub fn menu_area(card: Rect, bounds: Rect) -> Rect {
    let width = MENU_WIDTH.min(bounds.width);
    let height = MENU_HEIGHT.min(bounds.height);

    // Anchor under the card's menu affordance, pulled left/up as needed to
    // stay inside the board.
    let x = (card.x + card.width)
        .saturating_sub(width)
        .min(bounds.x + bounds.width - width);
    let y = (card.y + 1).min(bounds.y + bounds.height - height);

    Rect::new(x, y, width, height)
}

/// Resolves a click inside the menu to an item, if it hit one.
#[must_use]
pub fn menu_item_at(menu: Rect, x: u16, y: u16) -> Option<MenuItem> {
    if x <= menu.x || x >= menu.x + menu.width.saturating_sub(1) {
        return None;
    }
    match y.checked_sub(menu.y) {
        Some(1) => Some(MenuItem::Edit),
        Some(2) => Some(MenuItem::Delete),
        _ => None,
    }
}

/// Renders the Edit/Delete menu anchored to a card.
fn render_menu(card: Rect, bounds: Rect, buf: &mut Buffer) {
    let area = menu_area(card, bounds);

    Clear.render(area, buf);

    let menu = Paragraph::new(vec![
        Line::from(Span::styled(" Edit", Style::default().fg(Color::White))),
        Line::from(Span::styled(" Delete", Style::default().fg(Color::Red))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    menu.render(area, buf);
}
