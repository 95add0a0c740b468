//! Add/edit dialog rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use taskdeck_protocol::{DESCRIPTION_LIMIT, NAME_LIMIT};

use super::centered_rect;
use crate::form::{FormField, TaskForm};

/// Width of the dialog.
const FORM_WIDTH: u16 = 52;

/// Height of the dialog.
const FORM_HEIGHT: u16 = 14;

/// Renders the add/edit dialog centered over the board.
///
/// Each field shows its label and current buffer; the focused field is
/// highlighted and text fields display a trailing cursor marker. The name
/// and description labels include character counts against their limits.
pub fn render_form(form: &TaskForm, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    lines.push(Line::from(""));
    push_text_field(
        &mut lines,
        form,
        FormField::Name,
        &format!("Name ({}/{})", form.name.chars().count(), NAME_LIMIT),
        &form.name,
    );
    push_text_field(
        &mut lines,
        form,
        FormField::Description,
        &format!(
            "Description ({}/{})",
            form.description.chars().count(),
            DESCRIPTION_LIMIT
        ),
        &form.description,
    );
    push_text_field(
        &mut lines,
        form,
        FormField::DueDate,
        "Due date (YYYY-MM-DD)",
        &form.due_date,
    );

    // Status is cycled, not typed.
    let status_focused = form.focus == FormField::Status;
    lines.push(Line::from(Span::styled(
        "  Status",
        label_style(status_focused),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "  {} {} {}",
            if status_focused { "◀" } else { " " },
            form.status,
            if status_focused { "▶" } else { " " }
        ),
        value_style(status_focused),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter save · Esc cancel · Tab next field",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    Paragraph::new(lines).block(block).render(popup, buf);
}

fn push_text_field(
    lines: &mut Vec<Line<'static>>,
    form: &TaskForm,
    field: FormField,
    label: &str,
    value: &str,
) {
    let focused = form.focus == field;
    lines.push(Line::from(Span::styled(
        format!("  {label}"),
        label_style(focused),
    )));

    let cursor = if focused { "▏" } else { "" };
    lines.push(Line::from(Span::styled(
        format!("  {value}{cursor}"),
        value_style(focused),
    )));
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    }
}
