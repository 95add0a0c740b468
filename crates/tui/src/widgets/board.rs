//! Board rendering widget.
//!
//! This module provides functions for rendering the complete task board
//! with its four status columns arranged horizontally.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};
use taskdeck_protocol::{Board, Bucket};

use super::column::{ColumnPosition, render_column};
use crate::column_state::BoardUi;

/// Splits the board area into the four column areas, in bucket order.
///
/// Shared between rendering and mouse hit testing so a pointer position
/// maps to the same column the user sees.
#[must_use]
pub fn column_areas(area: Rect) -> [Rect; 4] {
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);
    [areas[0], areas[1], areas[2], areas[3]]
}

/// Returns the bucket whose column contains the given position, if any.
#[must_use]
pub fn bucket_at(area: Rect, x: u16, y: u16) -> Option<Bucket> {
    column_areas(area)
        .iter()
        .position(|col| col.contains((x, y).into()))
        .and_then(Bucket::from_index)
}

/// Returns the position of a column in the horizontal layout.
#[must_use]
pub fn column_position(index: usize) -> ColumnPosition {
    match index {
        0 => ColumnPosition::First,
        i if i == Bucket::all().len() - 1 => ColumnPosition::Last,
        _ => ColumnPosition::Middle,
    }
}

/// Renders the complete board to the buffer.
///
/// The board displays four columns (Pending, In Progress, Completed,
/// Cancelled) arranged horizontally with equal widths. Each column shows
/// its tasks sorted by due date, with the selected column and task
/// highlighted and any drag-over or open-menu state drawn from `ui`.
///
/// # Layout
///
/// ```text
/// +------------+------------+------------+------------+
/// | Pending    | In Progress| Completed  | Cancelled  |
/// +------------+------------+------------+------------+
/// | Task 1     | Task 3     | Task 5     | Task 7     |
/// | Task 2     | Task 4     |            |            |
/// +------------+------------+------------+------------+
/// ```
pub fn render_board(
    board: &Board,
    ui: &BoardUi,
    selected_column: usize,
    selected_task: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area);

    for (i, bucket) in Bucket::all().iter().enumerate() {
        let is_focused = selected_column == i;
        let task_selection = if is_focused { selected_task } else { None };
        let prev_focused = i > 0 && selected_column == i - 1;

        render_column(
            board.column(*bucket),
            ui.column(*bucket),
            is_focused,
            task_selection,
            areas[i],
            buf,
            column_position(i),
            prev_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use taskdeck_protocol::{Task, TaskStatus};

    fn task(id: &str, name: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            status,
            due_date: None,
        }
    }

    #[test]
    fn render_empty_board() {
        let board = Board::new();
        let ui = BoardUi::new();
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, &ui, 0, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        // All four columns should be rendered
        assert!(content.contains("Pending"));
        assert!(content.contains("In Progress"));
        assert!(content.contains("Completed"));
        assert!(content.contains("Cancelled"));
    }

    #[test]
    fn render_board_with_tasks() {
        let board = Board::from_tasks(vec![
            task("1", "First", TaskStatus::Pending),
            task("2", "Second", TaskStatus::Pending),
            task("3", "Third", TaskStatus::Completed),
        ]);
        let ui = BoardUi::new();
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, &ui, 0, Some(0), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Pending (2)"));
        assert!(content.contains("Completed (1)"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = Board::new();
        let ui = BoardUi::new();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with narrow area
        render_board(&board, &ui, 0, None, area, &mut buf);
    }

    #[test]
    fn bucket_at_maps_positions_to_columns() {
        let area = Rect::new(0, 0, 100, 20);

        assert_eq!(bucket_at(area, 5, 5), Some(Bucket::Pending));
        assert_eq!(bucket_at(area, 30, 5), Some(Bucket::InProgress));
        assert_eq!(bucket_at(area, 55, 5), Some(Bucket::Completed));
        assert_eq!(bucket_at(area, 80, 5), Some(Bucket::Cancelled));
    }

    #[test]
    fn bucket_at_outside_the_board_is_none() {
        let area = Rect::new(0, 5, 100, 20);
        assert_eq!(bucket_at(area, 50, 2), None);
    }

    #[test]
    fn column_positions_collapse_shared_borders() {
        assert_eq!(column_position(0), ColumnPosition::First);
        assert_eq!(column_position(1), ColumnPosition::Middle);
        assert_eq!(column_position(2), ColumnPosition::Middle);
        assert_eq!(column_position(3), ColumnPosition::Last);
    }
}
