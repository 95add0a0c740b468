//! Widget components for the taskdeck TUI.
//!
//! This module provides reusable rendering functions for the task board
//! UI, organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. Layout
//! helpers such as [`board::column_areas`] and [`column::layout_cards`]
//! are shared with mouse hit testing, so clicks resolve against exactly
//! the geometry the user sees.
//!
//! # Modules
//!
//! - [`board`]: Renders the complete board with four status columns
//! - [`column`]: Renders individual columns with task lists and menus
//! - [`task_card`]: Renders task cards with color coding based on status
//! - [`form`]: Renders the add/edit dialog
//! - [`toast`]: Renders the toast notification tray
//! - [`help`]: Renders the keybinding help overlay
//!
//! # Color Coding
//!
//! Task cards are color-coded based on their
//! [`TaskStatus`](taskdeck_protocol::TaskStatus):
//!
//! | Status | Color |
//! |--------|-------|
//! | `Pending` | Yellow (`Color::Yellow`) |
//! | `InProgress` | Blue (`Color::Blue`) |
//! | `Completed` | Green (`Color::Green`) |
//! | `Cancelled` | Red (`Color::Red`) |
//! | `Unknown` | Magenta (`Color::Magenta`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use taskdeck_protocol::Board;
//! use taskdeck_tui::column_state::BoardUi;
//! use taskdeck_tui::widgets;
//!
//! let board = Board::new();
//! let ui = BoardUi::new();
//!
//! let area = Rect::new(0, 0, 100, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, &ui, 0, None, area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod board;
pub mod column;
pub mod form;
pub mod help;
pub mod task_card;
pub mod toast;

// Re-export primary rendering functions for convenience
pub use board::{bucket_at, column_areas, column_position, render_board};
pub use column::{ColumnPosition, MenuItem, layout_cards, menu_area, menu_item_at, render_column};
pub use form::render_form;
pub use help::render_help_overlay;
pub use task_card::{
    TASK_CARD_HEIGHT, menu_affordance_area, render_task_card, status_color,
};
pub use toast::{render_toast_tray, toast_color};

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// is clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
