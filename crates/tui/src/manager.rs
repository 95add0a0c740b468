//! Board state coordination.
//!
//! The [`TaskManager`] owns the board, routes user intents through
//! validation and the API client, and raises toasts on success and
//! failure. Network errors never propagate past it: every failure becomes
//! a user-visible message and the board stays in a usable state.
//!
//! Status changes from a drag are applied optimistically: the card moves
//! immediately, the server write happens afterwards, and a failed write is
//! compensated by restoring the recorded prior status directly (no full
//! reload, no flicker).

use tracing::{debug, error};

use taskdeck_api::TaskApi;
use taskdeck_protocol::{Board, Bucket, Task, TaskDraft, TaskId, validate};

use crate::notify::Notifier;

/// The board plus the load/error flags the view renders from.
#[derive(Debug, Default)]
pub struct BoardState {
    /// The four classified columns.
    pub board: Board,
    /// `true` while a full task list fetch is in flight.
    pub is_loading: bool,
    /// Set when the last load failed; cleared on the next attempt.
    pub error: Option<String>,
}

impl BoardState {
    /// Creates an empty board state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the board with a fresh classification of `tasks`.
    pub fn apply_tasks(&mut self, tasks: Vec<Task>) {
        self.board = Board::from_tasks(tasks);
    }

    /// Re-sorts the columns without touching the server.
    ///
    /// Useful after an optimistic move appended a card out of due-date
    /// order, and exposed directly to the user as the sort action.
    pub fn resort(&mut self) {
        self.board = Board::from_tasks(self.board.all_tasks());
    }
}

/// State coordinator: owns the board, the API client, and the notifier.
pub struct TaskManager {
    api: TaskApi,
    notifier: Notifier,
    /// Bucket lists and flags, read by the view.
    pub state: BoardState,
}

impl TaskManager {
    /// Creates a coordinator with an empty board.
    #[must_use]
    pub fn new(api: TaskApi, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            state: BoardState::new(),
        }
    }

    /// Returns the notifier, for raising messages outside CRUD flows.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Fetches the full task list and rebuilds the columns.
    ///
    /// Wraps the call in the loading flag; a failure is captured into the
    /// error flag (and shown inline) rather than surfaced to the caller.
    pub async fn load(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;

        match self.api.list().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                self.state.apply_tasks(tasks);
            }
            Err(err) => {
                error!(error = %err, "failed to load tasks");
                self.state.error = Some("Failed to load tasks.".to_string());
            }
        }

        self.state.is_loading = false;
    }

    /// Validates and creates a task, reloading the board on success.
    ///
    /// Returns `true` when the task was created (the caller closes the
    /// form); validation and network failures raise a toast and return
    /// `false` so the form stays open for correction.
    pub async fn add(&mut self, draft: TaskDraft) -> bool {
        if let Err(err) = validate(&draft) {
            self.notifier.error("Invalid task", err.to_string());
            return false;
        }

        match self.api.create(&draft).await {
            Ok(task) => {
                self.notifier.success("Task added", task.name.clone());
                self.load().await;
                true
            }
            Err(err) => {
                error!(error = %err, "failed to add task");
                self.notifier.error("Failed to add task", err.to_string());
                false
            }
        }
    }

    /// Validates and replaces a task, reloading the board on success.
    ///
    /// Same return contract as [`TaskManager::add`].
    pub async fn edit(&mut self, id: &TaskId, draft: TaskDraft) -> bool {
        if let Err(err) = validate(&draft) {
            self.notifier.error("Invalid task", err.to_string());
            return false;
        }

        match self.api.update(id, &draft).await {
            Ok(task) => {
                self.notifier.success("Task updated", task.name.clone());
                self.load().await;
                true
            }
            Err(err) => {
                error!(error = %err, id = %id, "failed to update task");
                self.notifier.error("Failed to update task", err.to_string());
                false
            }
        }
    }

    /// Deletes a task. The card leaves the board only after the server
    /// confirms, via the reload.
    pub async fn delete(&mut self, id: &TaskId) {
        let name = self
            .state
            .board
            .get_task(id)
            .map(|task| task.name.clone())
            .unwrap_or_default();

        match self.api.delete(id).await {
            Ok(()) => {
                self.notifier.success("Task deleted", name);
                self.load().await;
            }
            Err(err) => {
                error!(error = %err, id = %id, "failed to delete task");
                self.notifier.error("Failed to delete task", err.to_string());
            }
        }
    }

    /// Moves a task to a new bucket: optimistic local move first, server
    /// write second.
    ///
    /// No-op when the task already sits in the destination bucket or does
    /// not exist. On a failed write the prior status is restored directly
    /// (compensating transition) and an error toast is raised.
    pub async fn change_status(&mut self, id: &TaskId, to: Bucket) {
        if self.state.board.bucket_of(id) == Some(to) {
            return;
        }

        // Optimistic move: the card is already in its new column while the
        // request is in flight.
        let Some(prior) = self.state.board.set_status(id, to) else {
            return;
        };

        let Some(draft) = self.state.board.get_task(id).map(Task::to_draft) else {
            return;
        };

        match self.api.update(id, &draft).await {
            Ok(_) => {
                debug!(id = %id, to = %draft.status, "moved task");
                self.state.resort();
            }
            Err(err) => {
                error!(error = %err, id = %id, "failed to update task status");
                self.state.board.restore_status(id, prior);
                self.state.resort();
                self.notifier
                    .error("Failed to update task status", err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use taskdeck_protocol::TaskStatus;

    fn task(id: &str, status: &str) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            description: None,
            status: TaskStatus::parse(status),
            due_date: None,
        }
    }

    fn manager_with(tasks: Vec<Task>) -> TaskManager {
        // Points at a closed port; tests below only exercise paths that
        // return before any request is sent.
        let mut manager = TaskManager::new(
            TaskApi::new("http://127.0.0.1:9"),
            Notifier::new(Duration::from_secs(3)),
        );
        manager.state.apply_tasks(tasks);
        manager
    }

    #[test]
    fn apply_tasks_rebuilds_columns() {
        let mut state = BoardState::new();
        state.apply_tasks(vec![task("1", "pending"), task("2", "completed")]);

        assert_eq!(state.board.column(Bucket::Pending).len(), 1);
        assert_eq!(state.board.column(Bucket::Completed).len(), 1);
    }

    #[test]
    fn resort_restores_due_date_order() {
        let mut state = BoardState::new();
        let mut early = task("early", "pending");
        early.due_date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1);
        let mut late = task("late", "pending");
        late.due_date = chrono::NaiveDate::from_ymd_opt(2026, 2, 1);

        state.apply_tasks(vec![early, late]);
        // Simulate an optimistic move appending out of order.
        let moved = state.board.column_mut(Bucket::Pending).remove_task("early").unwrap();
        state.board.column_mut(Bucket::Pending).tasks.push(moved);

        state.resort();

        let ids: Vec<_> = state
            .board
            .column(Bucket::Pending)
            .tasks
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[tokio::test]
    async fn change_status_to_same_bucket_is_a_no_op() {
        let mut manager = manager_with(vec![task("1", "pending")]);

        // Returns before any network call is attempted.
        manager.change_status(&"1".to_string(), Bucket::Pending).await;

        assert_eq!(manager.state.board.bucket_of("1"), Some(Bucket::Pending));
    }

    #[tokio::test]
    async fn change_status_of_missing_task_is_a_no_op() {
        let mut manager = manager_with(vec![]);
        manager.change_status(&"ghost".to_string(), Bucket::Completed).await;
        assert_eq!(manager.state.board.total_tasks(), 0);
    }

    #[tokio::test]
    async fn change_status_failure_restores_prior_status() {
        // The closed port makes the server write fail after the optimistic
        // move, driving the compensating rollback.
        let mut manager = manager_with(vec![task("1", "archived")]);
        assert_eq!(manager.state.board.bucket_of("1"), Some(Bucket::Pending));

        manager.change_status(&"1".to_string(), Bucket::Completed).await;

        assert_eq!(manager.state.board.bucket_of("1"), Some(Bucket::Pending));
        assert_eq!(
            manager.state.board.get_task("1").unwrap().status,
            TaskStatus::Unknown("archived".to_string())
        );
    }

    #[tokio::test]
    async fn add_rejects_invalid_draft_before_any_network_call() {
        let mut manager = manager_with(vec![]);

        let draft = TaskDraft {
            name: String::new(),
            ..TaskDraft::default()
        };

        assert!(!manager.add(draft).await);
    }

    #[tokio::test]
    async fn edit_rejects_overlong_name_before_any_network_call() {
        let mut manager = manager_with(vec![task("1", "pending")]);

        let draft = TaskDraft {
            name: "x".repeat(76),
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1),
            ..TaskDraft::default()
        };

        assert!(!manager.edit(&"1".to_string(), draft).await);
    }
}
