//! Add/edit form state.
//!
//! The form owns its field buffers and focus, consumes raw key events
//! while it is open, and produces a [`TaskDraft`] on submit. Validation of
//! the draft itself happens in the state coordinator, so a rejected draft
//! leaves the form open with its contents intact.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use taskdeck_protocol::{Bucket, Task, TaskDraft, TaskId, TaskStatus};

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new task.
    Add,
    /// Editing the task with this id.
    Edit(TaskId),
}

/// The form field currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Task name (text).
    Name,
    /// Description (text).
    Description,
    /// Due date (text, `YYYY-MM-DD`).
    DueDate,
    /// Status (cycled with left/right).
    Status,
}

impl FormField {
    const ORDER: [Self; 4] = [Self::Name, Self::Description, Self::DueDate, Self::Status];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What the form asks the application to do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Keep the form open; nothing else to do.
    Continue,
    /// Submit the current draft.
    Submit,
    /// Close the form without saving.
    Cancel,
}

/// State of the add/edit dialog.
#[derive(Debug, Clone)]
pub struct TaskForm {
    /// Add or edit.
    pub mode: FormMode,
    /// Name buffer.
    pub name: String,
    /// Description buffer.
    pub description: String,
    /// Due date buffer, expected as `YYYY-MM-DD`.
    pub due_date: String,
    /// Status the task will be saved with.
    pub status: TaskStatus,
    /// Field currently focused.
    pub focus: FormField,
}

impl TaskForm {
    /// Creates an empty form for a new task (status defaults to pending).
    #[must_use]
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            description: String::new(),
            due_date: String::new(),
            status: TaskStatus::Pending,
            focus: FormField::Name,
        }
    }

    /// Creates a form pre-filled from an existing task.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: FormMode::Edit(task.id.clone()),
            name: task.name.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            status: task.status.clone(),
            focus: FormField::Name,
        }
    }

    /// Returns the dialog title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Task",
            FormMode::Edit(_) => "Edit Task",
        }
    }

    /// Handles a key event while the form is open.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Left if self.focus == FormField::Status => self.cycle_status_back(),
            KeyCode::Right if self.focus == FormField::Status => self.cycle_status(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        FormOutcome::Continue
    }

    /// Builds the draft the form currently describes.
    ///
    /// An empty description becomes `None`; a due date that is blank or
    /// does not parse as `YYYY-MM-DD` becomes `None` and is caught by
    /// validation downstream.
    #[must_use]
    pub fn draft(&self) -> TaskDraft {
        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        TaskDraft {
            name: self.name.clone(),
            description,
            status: self.status.clone(),
            due_date: NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok(),
        }
    }

    fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Status => None,
        }
    }

    fn cycle_status(&mut self) {
        let bucket = self.status.bucket().next().unwrap_or(Bucket::Pending);
        self.status = TaskStatus::from(bucket);
    }

    fn cycle_status_back(&mut self) {
        let bucket = self
            .status
            .bucket()
            .previous()
            .unwrap_or(Bucket::Cancelled);
        self.status = TaskStatus::from(bucket);
    }
}
