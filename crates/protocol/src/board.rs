//! Board types and status-bucket classification.
//!
//! This module defines the four display buckets, the column and board
//! structures built from them, and the pure classification step that
//! partitions a flat task list into sorted columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId, TaskStatus};

/// One of the four status-partitioned columns on the board.
///
/// Bucket membership is always derived from a task's status via
/// [`TaskStatus::bucket`]; it is never stored independently, so the board
/// cannot drift out of sync with the underlying records.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Bucket;
///
/// let bucket = Bucket::InProgress;
/// assert_eq!(bucket.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    /// Tasks waiting to be started (and tasks with unrecognized statuses).
    #[default]
    Pending,
    /// Tasks currently being worked on.
    InProgress,
    /// Finished tasks.
    Completed,
    /// Abandoned tasks.
    Cancelled,
}

impl Bucket {
    /// Returns all buckets in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Bucket;
    ///
    /// let buckets = Bucket::all();
    /// assert_eq!(buckets.len(), 4);
    /// assert_eq!(buckets[0], Bucket::Pending);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
    }

    /// Returns a human-readable display name for the bucket.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns the index of this bucket in display order (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
            Self::Cancelled => 3,
        }
    }

    /// Creates a `Bucket` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 4).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Completed),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns the next bucket in display order, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous bucket in display order, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

/// A single column on the board: one bucket and its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Which bucket this column displays.
    pub bucket: Bucket,
    /// Tasks in this column, sorted ascending by due date.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column for the given bucket.
    #[must_use]
    pub const fn new(bucket: Bucket) -> Self {
        Self {
            bucket,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a reference to a task by id, if present.
    #[must_use]
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Removes and returns a task by id, if present.
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }
}

/// Sort key pinning the ordering of missing and unparseable due dates.
///
/// Dates the server sent that we could not parse are indistinguishable from
/// absent ones by the time they reach the board (both read as `None`), and
/// both sort after every real date. Ties keep their input order because the
/// underlying sort is stable.
fn due_date_key(task: &Task) -> NaiveDate {
    task.due_date.unwrap_or(NaiveDate::MAX)
}

/// The task board: four fixed columns, one per bucket.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{Board, Bucket};
///
/// let board = Board::new();
/// assert_eq!(board.columns.len(), 4);
/// assert!(board.column(Bucket::Pending).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The four columns, indexed by [`Bucket::index`].
    pub columns: [Column; 4],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Bucket::all().map(Column::new),
        }
    }

    /// Classifies a flat task list into the four columns.
    ///
    /// Classification is total: every input task lands in exactly one
    /// column, determined by [`TaskStatus::bucket`]. Each column is then
    /// sorted ascending by due date; tasks without a usable due date sort
    /// last (see [`Board`] docs on the pinned ordering rule). The sort is
    /// stable, so equal due dates keep their input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Board, Bucket, Task};
    ///
    /// let tasks: Vec<Task> = serde_json::from_str(
    ///     r#"[
    ///         {"id":"1","taskName":"A","status":"Pending"},
    ///         {"id":"2","taskName":"B","status":"IN-PROGRESS"},
    ///         {"id":"3","taskName":"C","status":"bogus"}
    ///     ]"#,
    /// ).unwrap();
    ///
    /// let board = Board::from_tasks(tasks);
    /// assert_eq!(board.column(Bucket::Pending).len(), 2);
    /// assert_eq!(board.column(Bucket::InProgress).len(), 1);
    /// assert!(board.column(Bucket::Completed).is_empty());
    /// ```
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            let bucket = task.status.bucket();
            board.column_mut(bucket).tasks.push(task);
        }
        for column in &mut board.columns {
            column.tasks.sort_by_key(due_date_key);
        }
        board
    }

    /// Returns a reference to the column for the given bucket.
    #[must_use]
    pub fn column(&self, bucket: Bucket) -> &Column {
        &self.columns[bucket.index()]
    }

    /// Returns a mutable reference to the column for the given bucket.
    #[must_use]
    pub fn column_mut(&mut self, bucket: Bucket) -> &mut Column {
        &mut self.columns[bucket.index()]
    }

    /// Finds a task by id across all columns.
    #[must_use]
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.columns.iter().find_map(|col| col.get_task(id))
    }

    /// Returns the bucket currently holding the task with the given id.
    #[must_use]
    pub fn bucket_of(&self, id: &str) -> Option<Bucket> {
        self.columns
            .iter()
            .find(|col| col.get_task(id).is_some())
            .map(|col| col.bucket)
    }

    /// Moves a task to a different bucket, updating its status field.
    ///
    /// The task is appended to the destination column (re-sorting happens
    /// on the next classification pass). Returns the task's prior status
    /// so a failed server write can be compensated, or `None` if the task
    /// was not found.
    pub fn set_status(&mut self, id: &TaskId, to: Bucket) -> Option<TaskStatus> {
        let from = self.bucket_of(id)?;
        let mut task = self.column_mut(from).remove_task(id)?;
        let prior = std::mem::replace(&mut task.status, TaskStatus::from(to));
        self.column_mut(to).tasks.push(task);
        Some(prior)
    }

    /// Restores a task to an exact prior status, moving it to the matching
    /// column.
    ///
    /// Unlike [`Board::set_status`], this writes the status verbatim, so a
    /// preserved [`TaskStatus::Unknown`] value survives a failed move and
    /// compensation round-trip. Returns `false` if the task was not found.
    pub fn restore_status(&mut self, id: &TaskId, status: TaskStatus) -> bool {
        let Some(from) = self.bucket_of(id) else {
            return false;
        };
        let Some(mut task) = self.column_mut(from).remove_task(id) else {
            return false;
        };
        let to = status.bucket();
        task.status = status;
        self.column_mut(to).tasks.push(task);
        true
    }

    /// Removes a task by id from whichever column holds it.
    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        self.columns.iter_mut().find_map(|col| col.remove_task(id))
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Returns all tasks in a single flat list, in column order.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<Task> {
        self.columns
            .iter()
            .flat_map(|col| col.tasks.iter().cloned())
            .collect()
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_task()(
            id in "[a-z0-9]{4}",
            status in prop_oneof![
                Just("pending".to_string()),
                Just("in-progress".to_string()),
                Just("completed".to_string()),
                Just("cancelled".to_string()),
                "[a-z]{1,8}",
            ],
            due in proptest::option::of((2020i32..2030, 1u32..=12, 1u32..=28)),
        ) -> Task {
            Task {
                id,
                name: "prop task".to_string(),
                description: None,
                status: TaskStatus::parse(&status),
                due_date: due.and_then(|(y, m, d)| chrono::NaiveDate::from_ymd_opt(y, m, d)),
            }
        }
    }

    proptest! {
        /// Every input task appears in exactly one column.
        #[test]
        fn classification_partitions_input(tasks in proptest::collection::vec(arb_task(), 0..30)) {
            let count = tasks.len();
            let board = Board::from_tasks(tasks);
            prop_assert_eq!(board.total_tasks(), count);

            for column in &board.columns {
                for task in &column.tasks {
                    prop_assert_eq!(task.status.bucket(), column.bucket);
                }
            }
        }

        /// Within each column, due dates are non-decreasing and dateless
        /// tasks come after every dated one.
        #[test]
        fn columns_are_sorted(tasks in proptest::collection::vec(arb_task(), 0..30)) {
            let board = Board::from_tasks(tasks);
            for column in &board.columns {
                let keys: Vec<_> = column
                    .tasks
                    .iter()
                    .map(|t| t.due_date.unwrap_or(chrono::NaiveDate::MAX))
                    .collect();
                let mut sorted = keys.clone();
                sorted.sort();
                prop_assert_eq!(keys, sorted);
            }
        }
    }
}
