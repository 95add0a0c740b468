//! Toast tray rendering widget.
//!
//! Toasts stack in the bottom-right corner of the terminal, newest at the
//! bottom, and are drawn over whatever is underneath them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::notify::{Toast, ToastKind, ToastTray};

/// Width of a toast box.
const TOAST_WIDTH: u16 = 34;

/// Height of a toast box: summary, detail, borders.
const TOAST_HEIGHT: u16 = 4;

/// Returns the accent color for a toast kind.
#[must_use]
pub const fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Warn => Color::Yellow,
        ToastKind::Info => Color::Blue,
    }
}

/// Renders the visible toasts into the bottom-right corner of `area`.
///
/// Toasts that do not fit vertically are dropped from the top of the
/// stack; the most recent ones stay visible.
pub fn render_toast_tray(tray: &ToastTray, area: Rect, buf: &mut Buffer) {
    let visible = tray.visible();
    if visible.is_empty() || area.width < TOAST_WIDTH || area.height < TOAST_HEIGHT {
        return;
    }

    let capacity = (area.height / TOAST_HEIGHT) as usize;
    let start = visible.len().saturating_sub(capacity);
    let shown = &visible[start..];

    let x = area.x + area.width - TOAST_WIDTH;
    let mut y = area.y + area.height - (shown.len() as u16) * TOAST_HEIGHT;

    for toast in shown {
        render_toast(toast, Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT), buf);
        y += TOAST_HEIGHT;
    }
}

/// Renders one toast box.
fn render_toast(toast: &Toast, area: Rect, buf: &mut Buffer) {
    let accent = toast_color(toast.kind);

    Clear.render(area, buf);

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(Span::styled(
            clip(&toast.summary, inner_width),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            clip(&toast.detail, inner_width),
            Style::default().fg(Color::White),
        )),
    ];

    let body = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent)),
    );
    body.render(area, buf);
}

fn clip(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}
