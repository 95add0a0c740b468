//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, keyboard and mouse interaction,
//! state updates, and rendering. Mouse support covers the whole
//! drag-and-drop flow (press a card, drag it over another column, release
//! to move it) as well as the per-card action menu.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use taskdeck_api::TaskApi;
use taskdeck_protocol::{Bucket, Message, TaskId};

use crate::{
    column_state::{BoardUi, drag_start},
    event::{key_to_message, poll_event},
    form::{FormMode, FormOutcome, TaskForm},
    manager::TaskManager,
    notify::{Notifier, SharedTray, ToastTray},
    terminal::AppTerminal,
    widgets::{
        MenuItem, bucket_at, column_areas, column_position, layout_cards, menu_affordance_area,
        menu_area, menu_item_at, render_board, render_form, render_help_overlay,
        render_toast_tray,
    },
};

/// An in-flight mouse drag.
#[derive(Debug, Clone)]
struct DragContext {
    /// Transfer payload built when the drag started.
    payload: String,
    /// Column currently hovered, for enter/leave bookkeeping.
    hovered: Option<Bucket>,
    /// Whether the pointer moved since the press; a press-and-release
    /// without movement is a plain click, not a drop.
    moved: bool,
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
pub struct App {
    manager: TaskManager,
    ui: BoardUi,
    selected_column: usize,
    selected_task: Option<usize>,
    /// A grabbed task follows left/right navigation between columns.
    grabbed: bool,
    form: Option<TaskForm>,
    help_visible: bool,
    tray: SharedTray,
    drag: Option<DragContext>,
    /// Board area from the last render, for mouse hit testing.
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application talking to the given API.
    ///
    /// The toast tray is created and attached to the notifier here, so
    /// notifications raised from the first load onwards are displayed.
    #[must_use]
    pub fn new(api: TaskApi, toast_duration: Duration) -> Self {
        let tray: SharedTray = Arc::new(Mutex::new(ToastTray::new()));
        let mut notifier = Notifier::new(toast_duration);
        notifier.init(Arc::clone(&tray));

        Self {
            manager: TaskManager::new(api, notifier),
            ui: BoardUi::new(),
            selected_column: 0,
            selected_task: None,
            grabbed: false,
            form: None,
            help_visible: false,
            tray,
            drag: None,
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Returns the state coordinator, mainly for inspection in tests.
    #[must_use]
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Runs the main application loop.
    ///
    /// Loads the board once, then polls for events, updates state, and
    /// renders until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        self.manager.load().await;
        self.clamp_selection();

        loop {
            terminal.draw(|frame| self.view(frame))?;

            match poll_event()? {
                Some(Event::Key(key)) => {
                    if let Some(form) = &mut self.form {
                        match form.handle_key(key) {
                            FormOutcome::Continue => {}
                            FormOutcome::Cancel => self.form = None,
                            FormOutcome::Submit => self.submit_form().await,
                        }
                    } else if let Some(msg) = key_to_message(key) {
                        self.update(msg).await;
                    }
                }
                Some(Event::Mouse(mouse)) => self.handle_mouse(mouse).await,
                _ => {}
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit` and
    /// `ToggleHelp` work normally when help is shown.
    pub async fn update(&mut self, msg: Message) {
        if self.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                // Any other key dismisses help
                _ => self.help_visible = false,
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::Escape => {
                if self.ui.open_menu().is_some() {
                    self.ui.close_menus();
                } else if self.grabbed {
                    self.grabbed = false;
                } else {
                    self.selected_task = None;
                }
            }
            Message::NavigateLeft => {
                if self.grabbed {
                    if let Some(to) = self.selected_bucket().previous() {
                        self.move_grabbed(to).await;
                    }
                } else {
                    self.selected_column = self.selected_column.saturating_sub(1);
                    self.clamp_selection();
                }
            }
            Message::NavigateRight => {
                if self.grabbed {
                    if let Some(to) = self.selected_bucket().next() {
                        self.move_grabbed(to).await;
                    }
                } else {
                    self.selected_column =
                        (self.selected_column + 1).min(Bucket::all().len() - 1);
                    self.clamp_selection();
                }
            }
            Message::NavigateUp => self.navigate_up(),
            Message::NavigateDown => self.navigate_down(),
            Message::Grab => {
                if self.selected_task.is_some() {
                    self.grabbed = !self.grabbed;
                }
            }
            Message::NewTask => self.form = Some(TaskForm::add()),
            Message::EditSelected => {
                if let Some(task) = self.selected_task_ref().cloned() {
                    self.form = Some(TaskForm::edit(&task));
                }
            }
            Message::DeleteSelected => {
                if let Some(id) = self.selected_task_id() {
                    self.manager.delete(&id).await;
                    self.clamp_selection();
                }
            }
            Message::ToggleMenu => {
                if let Some(id) = self.selected_task_id() {
                    self.ui.toggle_menu(self.selected_bucket(), &id);
                }
            }
            Message::Refresh => {
                self.manager.load().await;
                self.clamp_selection();
            }
            Message::Sort => {
                self.manager.state.resort();
                self.manager
                    .notifier()
                    .info("Sorting completed", "Tasks ordered by due date");
            }
            Message::ToggleHelp => self.help_visible = true,
        }
    }

    /// Handles a mouse event: card selection, drag-and-drop, and the
    /// per-card action menu.
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.mouse_down(mouse.column, mouse.row).await;
            }
            MouseEventKind::Drag(MouseButton::Left) => self.mouse_drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.mouse_up(mouse.column, mouse.row).await,
            _ => {}
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        self.board_area = chunks[1];
        let buf = frame.buffer_mut();
        render_board(
            &self.manager.state.board,
            &self.ui,
            self.selected_column,
            self.selected_task,
            chunks[1],
            buf,
        );

        if let Some(form) = &self.form {
            render_form(form, area, buf);
        }

        if self.help_visible {
            render_help_overlay(area, buf);
        }

        if let Ok(mut tray) = self.tray.lock() {
            tray.prune(Instant::now());
            render_toast_tray(&tray, area, buf);
        }
    }

    /// Renders the header bar with title and status cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, cue_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "taskdeck",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Task Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        // The right side doubles as the status area: loading and load
        // errors take precedence over the help cue.
        let cue = if self.manager.state.is_loading {
            Line::from(Span::styled(
                "Loading tasks...",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(error) = &self.manager.state.error {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("?", Style::default().fg(Color::Yellow)),
                Span::styled(" for help", Style::default().fg(Color::DarkGray)),
            ])
        };
        frame.render_widget(Paragraph::new(cue).alignment(Alignment::Right), cue_area);
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        let draft = form.draft();

        let saved = match &form.mode {
            FormMode::Add => self.manager.add(draft).await,
            FormMode::Edit(id) => self.manager.edit(id, draft).await,
        };

        // On failure the form stays open with its contents intact.
        if saved {
            self.form = None;
            self.clamp_selection();
        }
    }

    async fn mouse_down(&mut self, x: u16, y: u16) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        // The dialog is keyboard-driven; ignore clicks while it is open.
        if self.form.is_some() {
            return;
        }

        // An open menu gets first claim on the click.
        if self.ui.open_menu().is_some() {
            if let Some(item) = self
                .open_menu_rect()
                .and_then(|menu| menu_item_at(menu, x, y))
            {
                self.activate_menu_item(item).await;
                return;
            }

            // Clicking another card's menu affordance switches menus;
            // any other click just closes the menu.
            let on_affordance = self
                .card_at(x, y)
                .is_some_and(|(_, _, card)| menu_affordance_area(card).contains((x, y).into()));
            if !on_affordance {
                self.ui.close_menus();
                return;
            }
        }

        let Some(bucket) = bucket_at(self.board_area, x, y) else {
            return;
        };
        self.selected_column = bucket.index();

        if let Some((bucket, idx, card)) = self.card_at(x, y) {
            self.selected_task = Some(idx);

            let Some(task) = self.manager.state.board.column(bucket).tasks.get(idx) else {
                return;
            };

            if menu_affordance_area(card).contains((x, y).into()) {
                let id = task.id.clone();
                self.ui.toggle_menu(bucket, &id);
                return;
            }

            self.drag = Some(DragContext {
                payload: drag_start(task, bucket),
                hovered: None,
                moved: false,
            });
        } else {
            self.clamp_selection();
        }
    }

    fn mouse_drag(&mut self, x: u16, y: u16) {
        let over = bucket_at(self.board_area, x, y);
        let Some(drag) = &mut self.drag else {
            return;
        };
        drag.moved = true;

        if over != drag.hovered {
            if let Some(prev) = drag.hovered {
                self.ui.column_mut(prev).drag_leave();
            }
            if let Some(next) = over {
                self.ui.column_mut(next).drag_enter();
            }
            drag.hovered = over;
        }
    }

    async fn mouse_up(&mut self, x: u16, y: u16) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        // Press-and-release without movement was a click, already handled.
        if !drag.moved {
            self.ui.drag_end();
            return;
        }

        match bucket_at(self.board_area, x, y) {
            Some(bucket) => {
                if let Some(moved) = self.ui.drop(bucket, &drag.payload) {
                    self.manager
                        .change_status(&moved.task_id, moved.new_status)
                        .await;
                    self.clamp_selection();
                }
            }
            // Dropped outside the board: abandon the drag.
            None => self.ui.drag_end(),
        }
    }

    async fn activate_menu_item(&mut self, item: MenuItem) {
        let Some(id) = self.ui.open_menu().map(|(_, id)| id.clone()) else {
            return;
        };
        self.ui.close_menus();

        match item {
            MenuItem::Edit => {
                if let Some(task) = self.manager.state.board.get_task(&id) {
                    self.form = Some(TaskForm::edit(task));
                }
            }
            MenuItem::Delete => {
                self.manager.delete(&id).await;
                self.clamp_selection();
            }
        }
    }

    /// Moves the grabbed task to `to` and follows it with the selection.
    async fn move_grabbed(&mut self, to: Bucket) {
        let Some(id) = self.selected_task_id() else {
            return;
        };

        self.manager.change_status(&id, to).await;

        // Follow the card wherever it actually ended up (the move may have
        // been rolled back).
        if let Some(bucket) = self.manager.state.board.bucket_of(&id) {
            self.selected_column = bucket.index();
            self.selected_task = self
                .manager
                .state
                .board
                .column(bucket)
                .tasks
                .iter()
                .position(|task| task.id == id);
        }
        self.clamp_selection();
    }

    fn navigate_up(&mut self) {
        let len = self.current_column_len();
        if len == 0 {
            return;
        }
        self.selected_task = Some(match self.selected_task {
            None => 0,
            Some(idx) => idx.saturating_sub(1),
        });
    }

    fn navigate_down(&mut self) {
        let len = self.current_column_len();
        if len == 0 {
            return;
        }
        self.selected_task = Some(match self.selected_task {
            None => 0,
            Some(idx) => (idx + 1).min(len - 1),
        });
    }

    fn selected_bucket(&self) -> Bucket {
        Bucket::from_index(self.selected_column).unwrap_or(Bucket::Pending)
    }

    fn selected_task_ref(&self) -> Option<&taskdeck_protocol::Task> {
        let idx = self.selected_task?;
        self.manager
            .state
            .board
            .column(self.selected_bucket())
            .tasks
            .get(idx)
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task_ref().map(|task| task.id.clone())
    }

    fn current_column_len(&self) -> usize {
        self.manager.state.board.column(self.selected_bucket()).len()
    }

    /// Keeps the selection valid after the board changed underneath it.
    fn clamp_selection(&mut self) {
        let len = self.current_column_len();
        self.selected_task = match (self.selected_task, len) {
            (_, 0) | (None, _) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
        if self.selected_task.is_none() {
            self.grabbed = false;
        }
    }

    /// Selection passed to layout for one column: only the focused column
    /// scrolls to its selection, mirroring the renderer.
    fn column_selection(&self, bucket: Bucket) -> Option<usize> {
        (bucket.index() == self.selected_column)
            .then_some(self.selected_task)
            .flatten()
    }

    /// Finds the card under a pointer position.
    fn card_at(&self, x: u16, y: u16) -> Option<(Bucket, usize, Rect)> {
        let bucket = bucket_at(self.board_area, x, y)?;
        let col_area = column_areas(self.board_area)[bucket.index()];
        let count = self.manager.state.board.column(bucket).len();

        layout_cards(
            col_area,
            column_position(bucket.index()),
            count,
            self.column_selection(bucket),
        )
        .into_iter()
        .find(|(_, rect)| rect.contains((x, y).into()))
        .map(|(idx, rect)| (bucket, idx, rect))
    }

    /// The area of the open menu, if one is showing on a visible card.
    fn open_menu_rect(&self) -> Option<Rect> {
        let (bucket, open_id) = self.ui.open_menu()?;
        let col_area = column_areas(self.board_area)[bucket.index()];
        let column = self.manager.state.board.column(bucket);

        let card = layout_cards(
            col_area,
            column_position(bucket.index()),
            column.len(),
            self.column_selection(bucket),
        )
        .into_iter()
        .find_map(|(idx, rect)| (column.tasks.get(idx)?.id == *open_id).then_some(rect))?;

        Some(menu_area(card, self.board_area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_protocol::{Task, TaskStatus};

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            description: None,
            status,
            due_date: None,
        }
    }

    fn app() -> App {
        // Dead address; tests only exercise paths that stay local.
        App::new(TaskApi::new("http://127.0.0.1:9"), Duration::from_secs(3))
    }

    fn app_with(tasks: Vec<Task>) -> App {
        let mut app = app();
        app.manager.state.apply_tasks(tasks);
        app
    }

    #[tokio::test]
    async fn quit_message_sets_should_quit() {
        let mut app = app();
        assert!(!app.should_quit);

        app.update(Message::Quit).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn navigation_moves_between_columns() {
        let mut app = app();
        assert_eq!(app.selected_column, 0);

        app.update(Message::NavigateRight).await;
        assert_eq!(app.selected_column, 1);

        app.update(Message::NavigateLeft).await;
        assert_eq!(app.selected_column, 0);

        // Clamped at both ends.
        app.update(Message::NavigateLeft).await;
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            app.update(Message::NavigateRight).await;
        }
        assert_eq!(app.selected_column, 3);
    }

    #[tokio::test]
    async fn navigation_selects_tasks_within_column() {
        let mut app = app_with(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
        ]);

        assert_eq!(app.selected_task, None);
        app.update(Message::NavigateDown).await;
        assert_eq!(app.selected_task, Some(0));
        app.update(Message::NavigateDown).await;
        assert_eq!(app.selected_task, Some(1));
        // Clamped at the bottom.
        app.update(Message::NavigateDown).await;
        assert_eq!(app.selected_task, Some(1));
        app.update(Message::NavigateUp).await;
        assert_eq!(app.selected_task, Some(0));
    }

    #[tokio::test]
    async fn navigation_in_empty_column_keeps_no_selection() {
        let mut app = app_with(vec![]);
        app.update(Message::NavigateDown).await;
        assert_eq!(app.selected_task, None);
    }

    #[tokio::test]
    async fn toggle_help_shows_and_any_key_dismisses() {
        let mut app = app();
        assert!(!app.help_visible);

        app.update(Message::ToggleHelp).await;
        assert!(app.help_visible);

        // Navigation is intercepted to dismiss help.
        app.update(Message::NavigateRight).await;
        assert!(!app.help_visible);
        assert_eq!(app.selected_column, 0);
    }

    #[tokio::test]
    async fn quit_works_with_help_visible() {
        let mut app = app();
        app.update(Message::ToggleHelp).await;

        app.update(Message::Quit).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn new_task_opens_add_form() {
        let mut app = app();
        app.update(Message::NewTask).await;

        assert!(matches!(
            app.form.as_ref().map(|form| &form.mode),
            Some(FormMode::Add)
        ));
    }

    #[tokio::test]
    async fn edit_selected_opens_prefilled_form() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.update(Message::NavigateDown).await;

        app.update(Message::EditSelected).await;

        let form = app.form.expect("form should open");
        assert_eq!(form.mode, FormMode::Edit("1".to_string()));
        assert_eq!(form.name, "Task 1");
    }

    #[tokio::test]
    async fn edit_without_selection_does_nothing() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.update(Message::EditSelected).await;
        assert!(app.form.is_none());
    }

    #[tokio::test]
    async fn grab_requires_a_selection() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);

        app.update(Message::Grab).await;
        assert!(!app.grabbed);

        app.update(Message::NavigateDown).await;
        app.update(Message::Grab).await;
        assert!(app.grabbed);

        app.update(Message::Escape).await;
        assert!(!app.grabbed);
    }

    #[tokio::test]
    async fn sort_resorts_and_raises_toast() {
        let mut early = task("early", TaskStatus::Pending);
        early.due_date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1);
        let mut late = task("late", TaskStatus::Pending);
        late.due_date = chrono::NaiveDate::from_ymd_opt(2026, 2, 1);

        let mut app = app_with(vec![late, early]);
        app.update(Message::Sort).await;

        let ids: Vec<_> = app
            .manager
            .state
            .board
            .column(Bucket::Pending)
            .tasks
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, ["early", "late"]);

        let tray = app.tray.lock().unwrap();
        assert_eq!(tray.visible().len(), 1);
        assert_eq!(tray.visible()[0].summary, "Sorting completed");
    }

    #[tokio::test]
    async fn toggle_menu_opens_for_selected_task() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.update(Message::NavigateDown).await;

        app.update(Message::ToggleMenu).await;
        let (bucket, id) = app.ui.open_menu().expect("menu should be open");
        assert_eq!(bucket, Bucket::Pending);
        assert_eq!(id, "1");

        // Escape closes the menu before clearing the selection.
        app.update(Message::Escape).await;
        assert!(app.ui.open_menu().is_none());
        assert_eq!(app.selected_task, Some(0));
    }

    #[tokio::test]
    async fn escape_clears_selection_last() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.update(Message::NavigateDown).await;

        app.update(Message::Escape).await;
        assert_eq!(app.selected_task, None);
    }

    #[tokio::test]
    async fn mouse_drag_highlights_hovered_column() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.board_area = Rect::new(0, 3, 100, 20);

        // Press on the first card, then drag into the second column.
        app.mouse_down(2, 5).await;
        assert!(app.drag.is_some());

        app.mouse_drag(30, 5);
        assert!(app.ui.column(Bucket::InProgress).is_drag_over());

        app.mouse_drag(55, 5);
        assert!(!app.ui.column(Bucket::InProgress).is_drag_over());
        assert!(app.ui.column(Bucket::Completed).is_drag_over());
    }

    #[tokio::test]
    async fn click_without_movement_is_not_a_drop() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.board_area = Rect::new(0, 3, 100, 20);

        app.mouse_down(2, 5).await;
        app.mouse_up(2, 5).await;

        // Selection follows the click; the task does not move.
        assert_eq!(app.selected_task, Some(0));
        assert_eq!(
            app.manager.state.board.bucket_of("1"),
            Some(Bucket::Pending)
        );
    }

    #[tokio::test]
    async fn clicking_affordance_toggles_menu() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.board_area = Rect::new(0, 3, 100, 20);

        let (_, _, card) = app.card_at(2, 5).expect("card under pointer");
        let affordance = menu_affordance_area(card);

        app.mouse_down(affordance.x, affordance.y).await;
        assert!(app.ui.open_menu().is_some());

        app.mouse_down(affordance.x, affordance.y).await;
        assert!(app.ui.open_menu().is_none());
    }

    #[tokio::test]
    async fn clicking_outside_menu_closes_it() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.board_area = Rect::new(0, 3, 100, 20);

        let (_, _, card) = app.card_at(2, 5).expect("card under pointer");
        let affordance = menu_affordance_area(card);
        app.mouse_down(affordance.x, affordance.y).await;
        assert!(app.ui.open_menu().is_some());

        // Click in an empty column, well away from the menu.
        app.mouse_down(80, 15).await;
        assert!(app.ui.open_menu().is_none());
    }

    #[tokio::test]
    async fn menu_edit_item_opens_form() {
        let mut app = app_with(vec![task("1", TaskStatus::Pending)]);
        app.board_area = Rect::new(0, 3, 100, 20);

        let (_, _, card) = app.card_at(2, 5).expect("card under pointer");
        let affordance = menu_affordance_area(card);
        app.mouse_down(affordance.x, affordance.y).await;

        let menu = app.open_menu_rect().expect("menu rect");
        app.mouse_down(menu.x + 2, menu.y + 1).await;

        let form = app.form.expect("edit form should open");
        assert_eq!(form.mode, FormMode::Edit("1".to_string()));
        assert!(app.ui.open_menu().is_none());
    }
}
