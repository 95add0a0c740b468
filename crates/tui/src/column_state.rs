//! Per-column drag-and-drop and menu state machine.
//!
//! Each column tracks three things independently of rendering: whether a
//! drag is currently hovering over it, which card's action menu is open,
//! and what happens on drop. The machine is deliberately tolerant at the
//! drop boundary: a malformed transfer payload is treated as if no drop
//! happened, with no event and no error.

use taskdeck_protocol::{Bucket, DragPayload, Task, TaskId};

/// Event raised when a card is dropped onto a different column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMoved {
    /// The dragged task.
    pub task_id: TaskId,
    /// The destination column's bucket.
    pub new_status: Bucket,
}

/// Interaction state of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnUi {
    /// Nothing transient going on.
    #[default]
    Idle,
    /// A dragged card is hovering over this column.
    ///
    /// `depth` counts unbalanced enter events so that moving the pointer
    /// over a child region (which fires a leave for the column followed by
    /// an enter) does not prematurely clear the highlight; the column only
    /// returns to idle when the pointer truly exits its boundary.
    DragOver {
        /// Net enter count; 0 would mean the pointer left entirely.
        depth: u32,
    },
    /// A card's action menu is open. At most one per column, and the
    /// application keeps at most one open across the whole board.
    MenuOpen {
        /// The card whose menu is showing.
        task_id: TaskId,
    },
}

/// The drag/menu state machine for one column.
#[derive(Debug, Clone)]
pub struct ColumnState {
    bucket: Bucket,
    ui: ColumnUi,
}

impl ColumnState {
    /// Creates an idle column for the given bucket.
    #[must_use]
    pub fn new(bucket: Bucket) -> Self {
        Self {
            bucket,
            ui: ColumnUi::Idle,
        }
    }

    /// The bucket this column represents.
    #[must_use]
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Returns `true` while a drag hovers over this column.
    #[must_use]
    pub fn is_drag_over(&self) -> bool {
        matches!(self.ui, ColumnUi::DragOver { .. })
    }

    /// Returns the card whose menu is open, if any.
    #[must_use]
    pub fn open_menu(&self) -> Option<&TaskId> {
        match &self.ui {
            ColumnUi::MenuOpen { task_id } => Some(task_id),
            _ => None,
        }
    }

    /// A dragged card entered this column (or one of its child regions).
    pub fn drag_enter(&mut self) {
        self.ui = match std::mem::take(&mut self.ui) {
            ColumnUi::DragOver { depth } => ColumnUi::DragOver { depth: depth + 1 },
            // Entering with a drag closes any open menu.
            _ => ColumnUi::DragOver { depth: 1 },
        };
    }

    /// A dragged card left this column or one of its child regions.
    ///
    /// The column only returns to idle when every enter has been balanced,
    /// i.e. when the pointer has truly exited the column boundary.
    pub fn drag_leave(&mut self) {
        if let ColumnUi::DragOver { depth } = &mut self.ui {
            *depth = depth.saturating_sub(1);
            if *depth == 0 {
                self.ui = ColumnUi::Idle;
            }
        }
    }

    /// A drop landed on this column with the given raw transfer payload.
    ///
    /// Always resets transient state. Returns a [`TaskMoved`] event when
    /// the payload parses and the card came from a different column;
    /// malformed payloads and same-column drops are silent no-ops.
    pub fn drop(&mut self, raw_payload: &str) -> Option<TaskMoved> {
        self.ui = ColumnUi::Idle;

        let payload = DragPayload::parse(raw_payload)?;
        if payload.from_status == self.bucket {
            return None;
        }

        Some(TaskMoved {
            task_id: payload.id,
            new_status: self.bucket,
        })
    }

    /// Toggles the action menu for a card: open if closed, closed if this
    /// card's menu is already showing. Opening replaces any other menu in
    /// this column.
    pub fn toggle_menu(&mut self, task_id: &TaskId) {
        self.ui = match &self.ui {
            ColumnUi::MenuOpen { task_id: open } if open == task_id => ColumnUi::Idle,
            _ => ColumnUi::MenuOpen {
                task_id: task_id.clone(),
            },
        };
    }

    /// A click landed in the column outside any open menu.
    pub fn click_outside(&mut self) {
        if matches!(self.ui, ColumnUi::MenuOpen { .. }) {
            self.ui = ColumnUi::Idle;
        }
    }

    /// Clears all transient state (used at drag end, regardless of where
    /// or whether the drop landed).
    pub fn reset(&mut self) {
        self.ui = ColumnUi::Idle;
    }
}

/// Builds the transfer payload for a drag starting on `task` in `from`.
#[must_use]
pub fn drag_start(task: &Task, from: Bucket) -> String {
    DragPayload {
        id: task.id.clone(),
        from_status: from,
        task_name: task.name.clone(),
    }
    .to_json()
}

/// The four column state machines, with the cross-column invariants the
/// board needs: at most one open menu anywhere, and drag end clears every
/// column's transient state.
#[derive(Debug, Clone)]
pub struct BoardUi {
    columns: [ColumnState; 4],
}

impl Default for BoardUi {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardUi {
    /// Creates the board-wide interaction state, all columns idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Bucket::all().map(ColumnState::new),
        }
    }

    /// Returns the state machine for one column.
    #[must_use]
    pub fn column(&self, bucket: Bucket) -> &ColumnState {
        &self.columns[bucket.index()]
    }

    /// Returns the mutable state machine for one column.
    pub fn column_mut(&mut self, bucket: Bucket) -> &mut ColumnState {
        &mut self.columns[bucket.index()]
    }

    /// Returns the single open menu across the board, if any.
    #[must_use]
    pub fn open_menu(&self) -> Option<(Bucket, &TaskId)> {
        self.columns
            .iter()
            .find_map(|col| col.open_menu().map(|id| (col.bucket(), id)))
    }

    /// Toggles a card's menu, closing any menu open elsewhere first so at
    /// most one menu is ever showing.
    pub fn toggle_menu(&mut self, bucket: Bucket, task_id: &TaskId) {
        for col in &mut self.columns {
            if col.bucket() != bucket {
                col.click_outside();
            }
        }
        self.column_mut(bucket).toggle_menu(task_id);
    }

    /// Closes any open menu anywhere on the board.
    pub fn close_menus(&mut self) {
        for col in &mut self.columns {
            col.click_outside();
        }
    }

    /// A drop landed on `bucket`. Closes menus and clears drag state
    /// everywhere, then delegates to the destination column.
    pub fn drop(&mut self, bucket: Bucket, raw_payload: &str) -> Option<TaskMoved> {
        self.close_menus();
        let event = self.column_mut(bucket).drop(raw_payload);
        self.drag_end();
        event
    }

    /// Drag finished (dropped or abandoned): clears lingering drag visuals
    /// on every column.
    pub fn drag_end(&mut self) {
        for col in &mut self.columns {
            if col.is_drag_over() {
                col.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_protocol::{DragPayload, TaskStatus};

    fn task(id: &str, name: &str) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
        }
    }

    fn payload(id: &str, from: Bucket) -> String {
        DragPayload {
            id: id.to_string(),
            from_status: from,
            task_name: "Task".to_string(),
        }
        .to_json()
    }

    #[test]
    fn drag_enter_and_leave_toggle_highlight() {
        let mut col = ColumnState::new(Bucket::Completed);
        assert!(!col.is_drag_over());

        col.drag_enter();
        assert!(col.is_drag_over());

        col.drag_leave();
        assert!(!col.is_drag_over());
    }

    #[test]
    fn drag_over_survives_child_boundaries() {
        let mut col = ColumnState::new(Bucket::Completed);

        // Pointer enters the column, then a card inside it: the leave/enter
        // pair for the child must not clear the highlight.
        col.drag_enter();
        col.drag_enter();
        col.drag_leave();
        assert!(col.is_drag_over());

        col.drag_leave();
        assert!(!col.is_drag_over());
    }

    #[test]
    fn drop_from_other_column_raises_one_event() {
        let mut col = ColumnState::new(Bucket::Completed);
        col.drag_enter();

        let event = col.drop(&payload("ca36", Bucket::Pending));
        assert_eq!(
            event,
            Some(TaskMoved {
                task_id: "ca36".to_string(),
                new_status: Bucket::Completed,
            })
        );
        assert!(!col.is_drag_over());
    }

    #[test]
    fn same_column_drop_is_a_no_op() {
        let mut col = ColumnState::new(Bucket::Pending);
        col.drag_enter();

        assert_eq!(col.drop(&payload("ca36", Bucket::Pending)), None);
        assert!(!col.is_drag_over());
    }

    #[test]
    fn malformed_payload_drop_is_silent() {
        let mut col = ColumnState::new(Bucket::Cancelled);
        col.drag_enter();

        for raw in ["", "not json", "{}", r#"{"id":"x"}"#] {
            assert_eq!(col.drop(raw), None, "input: {raw:?}");
        }
        assert!(!col.is_drag_over());
    }

    #[test]
    fn menu_toggles_open_and_closed() {
        let mut col = ColumnState::new(Bucket::Pending);
        let id = "ca36".to_string();

        col.toggle_menu(&id);
        assert_eq!(col.open_menu(), Some(&id));

        col.toggle_menu(&id);
        assert_eq!(col.open_menu(), None);
    }

    #[test]
    fn opening_second_menu_closes_first() {
        let mut col = ColumnState::new(Bucket::Pending);
        let first = "a".to_string();
        let second = "b".to_string();

        col.toggle_menu(&first);
        col.toggle_menu(&second);
        assert_eq!(col.open_menu(), Some(&second));
    }

    #[test]
    fn click_outside_closes_menu() {
        let mut col = ColumnState::new(Bucket::Pending);
        col.toggle_menu(&"ca36".to_string());

        col.click_outside();
        assert_eq!(col.open_menu(), None);
    }

    #[test]
    fn drag_enter_closes_open_menu() {
        let mut col = ColumnState::new(Bucket::Pending);
        col.toggle_menu(&"ca36".to_string());

        col.drag_enter();
        assert!(col.is_drag_over());
        assert_eq!(col.open_menu(), None);
    }

    #[test]
    fn drag_start_serializes_transfer_payload() {
        let raw = drag_start(&task("ca36", "Design Homepage Mockup"), Bucket::Pending);
        let parsed = DragPayload::parse(&raw).unwrap();

        assert_eq!(parsed.id, "ca36");
        assert_eq!(parsed.from_status, Bucket::Pending);
        assert_eq!(parsed.task_name, "Design Homepage Mockup");
    }

    #[test]
    fn board_keeps_single_menu_open() {
        let mut board = BoardUi::new();
        board.toggle_menu(Bucket::Pending, &"a".to_string());
        board.toggle_menu(Bucket::Completed, &"b".to_string());

        let (bucket, id) = board.open_menu().unwrap();
        assert_eq!(bucket, Bucket::Completed);
        assert_eq!(id, "b");
        assert_eq!(board.column(Bucket::Pending).open_menu(), None);
    }

    #[test]
    fn board_drag_end_clears_every_column() {
        let mut board = BoardUi::new();
        board.column_mut(Bucket::Pending).drag_enter();
        board.column_mut(Bucket::Completed).drag_enter();

        board.drag_end();

        for bucket in Bucket::all() {
            assert!(!board.column(bucket).is_drag_over());
        }
    }

    #[test]
    fn board_drop_closes_menu_in_other_column() {
        let mut board = BoardUi::new();
        board.toggle_menu(Bucket::Completed, &"m1".to_string());
        board.column_mut(Bucket::InProgress).drag_enter();

        let event = board.drop(Bucket::InProgress, &payload("7", Bucket::Pending));

        assert!(event.is_some());
        assert_eq!(board.open_menu(), None);
    }

    #[test]
    fn board_drop_routes_to_destination_column() {
        let mut board = BoardUi::new();
        board.column_mut(Bucket::InProgress).drag_enter();

        let event = board.drop(Bucket::InProgress, &payload("7", Bucket::Pending));
        assert_eq!(
            event,
            Some(TaskMoved {
                task_id: "7".to_string(),
                new_status: Bucket::InProgress,
            })
        );
        assert!(!board.column(Bucket::InProgress).is_drag_over());
    }
}
