//! Task-related types for the task board.
//!
//! This module defines the core task types used throughout the taskdeck
//! application, including task identifiers, statuses, and the task record
//! itself as it travels over the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::Bucket;

/// Unique identifier for a task.
///
/// The server assigns identifiers, so they are opaque strings rather than
/// anything the client can mint locally.
pub type TaskId = String;

/// The status of a task as reported by the server.
///
/// Statuses are parsed case-insensitively and with lenient separator
/// handling (`in-progress`, `inprogress`, `in progress`, and `in_progress`
/// all mean the same thing; both `cancelled` and `canceled` spellings are
/// accepted). A value that matches none of the known statuses is kept as
/// [`TaskStatus::Unknown`] rather than silently coerced, so data-quality
/// problems stay visible; unknown statuses are bucketed with pending tasks
/// for display purposes via [`TaskStatus::bucket`].
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::TaskStatus;
///
/// assert_eq!(TaskStatus::parse("Pending"), TaskStatus::Pending);
/// assert_eq!(TaskStatus::parse("IN-PROGRESS"), TaskStatus::InProgress);
/// assert_eq!(TaskStatus::parse("canceled"), TaskStatus::Cancelled);
/// assert!(matches!(TaskStatus::parse("bogus"), TaskStatus::Unknown(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Task has not been started yet.
    #[default]
    Pending,
    /// Task is actively being worked on.
    InProgress,
    /// Task finished successfully.
    Completed,
    /// Task was abandoned.
    Cancelled,
    /// The server sent a status string this client does not recognize.
    /// The original text is preserved so it round-trips unchanged.
    Unknown(String),
}

impl TaskStatus {
    /// Parses a status from its wire representation.
    ///
    /// Never fails: unrecognized input becomes [`TaskStatus::Unknown`]
    /// carrying the original text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "pending" => Self::Pending,
            "inprogress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Returns the canonical wire representation of this status.
    ///
    /// Unknown statuses echo their original text so that editing a task we
    /// do not fully understand never destroys the server's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::InProgress.as_wire_str(), "in-progress");
    /// assert_eq!(TaskStatus::parse("mystery").as_wire_str(), "mystery");
    /// ```
    #[must_use]
    pub fn as_wire_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Returns the display bucket this status belongs to.
    ///
    /// Every status maps to exactly one bucket. Unknown statuses are
    /// deliberately shown in the pending column, which is where new or
    /// unclassifiable work lands.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Bucket, TaskStatus};
    ///
    /// assert_eq!(TaskStatus::Completed.bucket(), Bucket::Completed);
    /// assert_eq!(TaskStatus::parse("???").bucket(), Bucket::Pending);
    /// ```
    #[must_use]
    pub fn bucket(&self) -> Bucket {
        match self {
            Self::Pending | Self::Unknown(_) => Bucket::Pending,
            Self::InProgress => Bucket::InProgress,
            Self::Completed => Bucket::Completed,
            Self::Cancelled => Bucket::Cancelled,
        }
    }
}

impl From<Bucket> for TaskStatus {
    fn from(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Pending => Self::Pending,
            Bucket::InProgress => Self::InProgress,
            Bucket::Completed => Self::Completed,
            Bucket::Cancelled => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing field is handled by `#[serde(default)]` on the task
        // struct; a present-but-unrecognized value becomes Unknown.
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A task record as exchanged with the server.
///
/// Field names on the wire are camelCase (`taskName`, `dueDate`) to match
/// the REST endpoint's conventions.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Task;
///
/// let task: Task = serde_json::from_str(
///     r#"{"id":"ca36","taskName":"Design mockup","status":"pending","dueDate":"2025-12-05"}"#,
/// ).unwrap();
/// assert_eq!(task.name, "Design mockup");
/// assert!(task.due_date.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned unique identifier.
    pub id: TaskId,
    /// Short summary of the task. At most 75 characters when written.
    #[serde(rename = "taskName")]
    pub name: String,
    /// Optional longer description. At most 250 characters when written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current status of the task.
    #[serde(default)]
    pub status: TaskStatus,
    /// When the task is due. Absent, null, or unparseable dates all read
    /// back as `None`.
    #[serde(
        rename = "dueDate",
        default,
        with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Returns a draft carrying this task's editable fields.
    ///
    /// Used to seed the edit form and to build status-only updates.
    #[must_use]
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            due_date: self.due_date,
        }
    }
}

/// The editable fields of a task, used for create and edit calls.
///
/// The server assigns the identifier, so drafts carry everything except
/// the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short summary of the task.
    #[serde(rename = "taskName")]
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status the task should have.
    #[serde(default)]
    pub status: TaskStatus,
    /// When the task is due. Required by validation for create and edit.
    #[serde(
        rename = "dueDate",
        default,
        with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Returns a copy of this draft with a different status.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{TaskDraft, TaskStatus};
    ///
    /// let draft = TaskDraft::default().with_status(TaskStatus::Completed);
    /// assert_eq!(draft.status, TaskStatus::Completed);
    /// ```
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Lenient serde codec for due dates.
///
/// The server stores due dates as strings and does not validate them, so
/// reads must tolerate missing, null, empty, and malformed values. All of
/// those deserialize to `None`; well-formed `YYYY-MM-DD` values (or an
/// RFC 3339 timestamp, whose date part is kept) deserialize to `Some`.
/// Serialization always writes `YYYY-MM-DD`.
mod lenient_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }

    /// Parses a date string, returning `None` when it cannot be understood.
    pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
