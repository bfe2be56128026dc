//! Application state and keyboard gesture handling.
//!
//! `App` owns the [`Board`] and turns key events into board mutations.
//! Every state-changing gesture returns the [`StoreCommand`] the main
//! loop should dispatch; rejected validations, cancelled drags, and
//! null moves return `None` and never touch persistence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termban_model::{TaskId, TaskStatus};

use crate::board::{Board, DropEvent, EditOutcome, Slot};
use crate::persist::{StoreCommand, StoreEvent};

/// Which interaction mode the app is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the board.
    Normal,
    /// Typing the content of a new task for the given stage.
    AddInput {
        /// Stage the new task will be added to.
        status: TaskStatus,
    },
    /// Editing the content of an existing task.
    EditInput {
        /// The task being edited.
        task_id: TaskId,
    },
    /// A task has been picked up and is being moved to a new slot.
    Grabbed {
        /// The task being moved.
        task_id: TaskId,
        /// Where the drag started.
        source: Slot,
        /// Where the task would land if dropped now.
        target: Slot,
    },
}

/// Persistence indicator shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Persisted state matches the board.
    Saved,
    /// A save is in flight.
    Saving,
    /// The last save failed; the board is ahead of the store.
    Unsaved,
}

/// Main application state.
pub struct App {
    /// The task collection and its mutation operations.
    pub board: Board,
    /// Which column is focused.
    pub focus: TaskStatus,
    /// Per-column cursor positions (clamped on read).
    selection: [usize; 3],
    /// Current text input (add/edit modes).
    pub input: String,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// Current interaction mode.
    pub mode: Mode,
    /// Persistence indicator.
    pub sync: SyncState,
    /// Backend name for the status bar (`"file"` or `"server"`).
    pub store_label: &'static str,
    /// Transient status bar message.
    pub status_note: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the app over an already-loaded board.
    #[must_use]
    pub const fn new(board: Board, store_label: &'static str) -> Self {
        Self {
            board,
            focus: TaskStatus::Todo,
            selection: [0; 3],
            input: String::new(),
            cursor_position: 0,
            mode: Mode::Normal,
            sync: SyncState::Saved,
            store_label,
            status_note: None,
            should_quit: false,
        }
    }

    /// The clamped cursor position within a column.
    #[must_use]
    pub fn selection(&self, status: TaskStatus) -> usize {
        let count = self.board.count(status);
        self.selection[Self::column_of(status)].min(count.saturating_sub(1))
    }

    /// The task currently under the cursor, if the focused column is
    /// non-empty.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.board
            .by_status(self.focus)
            .get(self.selection(self.focus))
            .map(|t| t.id.clone())
    }

    /// Handle a key event, returning a store command when the gesture
    /// changed the board or requested a reset.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<StoreCommand> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }
        match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key),
            Mode::AddInput { status } => self.handle_add_key(key, status),
            Mode::EditInput { task_id } => self.handle_edit_key(key, &task_id),
            Mode::Grabbed {
                task_id,
                source,
                target,
            } => self.handle_grab_key(key, task_id, source, target),
        }
    }

    /// Apply an event from the store coordinator.
    pub fn apply_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::SaveOk => {
                self.sync = SyncState::Saved;
                self.status_note = None;
            }
            StoreEvent::SaveFailed(message) => {
                self.sync = SyncState::Unsaved;
                self.status_note = Some(format!("save failed: {message}"));
            }
            StoreEvent::ResetDone(tasks) => {
                self.board.replace(tasks);
                self.selection = [0; 3];
                self.sync = SyncState::Saved;
                self.status_note = Some("board reset from defaults".to_string());
            }
            StoreEvent::ResetFailed(message) => {
                self.status_note = Some(format!("reset failed: {message}"));
            }
        }
    }

    // -- Normal mode -------------------------------------------------------

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<StoreCommand> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                self.focus = Self::cycle(self.focus, 1);
                None
            }
            KeyCode::BackTab => {
                self.focus = Self::cycle(self.focus, 2);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus = Self::shift(self.focus, -1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus = Self::shift(self.focus, 1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('a') => {
                self.clear_input();
                self.mode = Mode::AddInput { status: self.focus };
                None
            }
            // Enter on a focused, non-editing task starts an edit.
            KeyCode::Enter | KeyCode::Char('e') => {
                self.start_edit();
                None
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char(' ') | KeyCode::Char('g') => {
                self.grab_selected();
                None
            }
            KeyCode::Char('R') => {
                self.sync = SyncState::Saving;
                Some(StoreCommand::Reset)
            }
            _ => None,
        }
    }

    fn start_edit(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Some(task) = self.board.get(&id)
        {
            self.input = task.content.clone();
            self.cursor_position = self.input.chars().count();
            self.mode = Mode::EditInput { task_id: id };
        }
    }

    fn delete_selected(&mut self) -> Option<StoreCommand> {
        let id = self.selected_task_id()?;
        self.board.delete(&id).then(|| self.save_command())
    }

    fn grab_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let slot = Slot::new(self.focus, self.selection(self.focus));
            self.mode = Mode::Grabbed {
                task_id: id,
                source: slot,
                target: slot,
            };
        }
    }

    // -- Add mode ----------------------------------------------------------

    fn handle_add_key(&mut self, key: KeyEvent, status: TaskStatus) -> Option<StoreCommand> {
        match key.code {
            KeyCode::Enter => {
                let content = std::mem::take(&mut self.input);
                self.cursor_position = 0;
                self.mode = Mode::Normal;
                // Blank content is silently discarded, not an error.
                let added = self.board.add(&content, None, status)?;
                self.focus = status;
                self.selection[Self::column_of(status)] =
                    self.board.count(status).saturating_sub(1);
                tracing::debug!(task_id = %added.id, "task added");
                Some(self.save_command())
            }
            // Tab cycles which column the new task goes to.
            KeyCode::Tab => {
                self.mode = Mode::AddInput {
                    status: Self::cycle(status, 1),
                };
                None
            }
            KeyCode::Esc => {
                self.clear_input();
                self.mode = Mode::Normal;
                None
            }
            _ => {
                self.handle_input_editing(key);
                None
            }
        }
    }

    // -- Edit mode ---------------------------------------------------------

    fn handle_edit_key(&mut self, key: KeyEvent, task_id: &TaskId) -> Option<StoreCommand> {
        match key.code {
            KeyCode::Enter => {
                let content = std::mem::take(&mut self.input);
                self.cursor_position = 0;
                self.mode = Mode::Normal;
                match self.board.commit_edit(task_id, &content) {
                    // A blank commit is delete semantics, still a change
                    // worth persisting.
                    EditOutcome::Updated | EditOutcome::Deleted => Some(self.save_command()),
                    EditOutcome::NotFound => None,
                }
            }
            KeyCode::Esc => {
                self.clear_input();
                self.mode = Mode::Normal;
                None
            }
            _ => {
                self.handle_input_editing(key);
                None
            }
        }
    }

    // -- Grab mode ---------------------------------------------------------

    fn handle_grab_key(
        &mut self,
        key: KeyEvent,
        task_id: TaskId,
        source: Slot,
        target: Slot,
    ) -> Option<StoreCommand> {
        match key.code {
            // Cancelled drag: no destination, nothing changes, nothing
            // is persisted.
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let event = DropEvent {
                    task_id,
                    source,
                    destination: Some(target),
                };
                let changed = self.board.apply_drop(&event);
                self.focus = target.status;
                self.selection[Self::column_of(target.status)] = target.index;
                self.mode = Mode::Normal;
                changed.then(|| self.save_command())
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.retarget(task_id, source, Self::shift(target.status, -1), target.index);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.retarget(task_id, source, Self::shift(target.status, 1), target.index);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.retarget(task_id, source, target.status, target.index.saturating_sub(1));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.retarget(task_id, source, target.status, target.index + 1);
                None
            }
            _ => None,
        }
    }

    /// Moves the drop target, clamping the index to the valid insert
    /// range of the (possibly new) column.
    fn retarget(&mut self, task_id: TaskId, source: Slot, status: TaskStatus, index: usize) {
        let max = self.max_drop_index(status, source);
        self.mode = Mode::Grabbed {
            task_id,
            source,
            target: Slot::new(status, index.min(max)),
        };
    }

    /// Highest meaningful drop index in a column. Within the source
    /// column the task itself still occupies a slot; elsewhere it can
    /// land after the last task.
    fn max_drop_index(&self, status: TaskStatus, source: Slot) -> usize {
        let count = self.board.count(status);
        if status == source.status {
            count.saturating_sub(1)
        } else {
            count
        }
    }

    // -- Input editing helpers ---------------------------------------------

    fn handle_input_editing(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                let chars = self.input.chars().count();
                if self.cursor_position < chars {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }

    fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.byte_index();
            self.input.remove(index);
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    // -- Misc helpers ------------------------------------------------------

    fn save_command(&mut self) -> StoreCommand {
        self.sync = SyncState::Saving;
        StoreCommand::Save(self.board.snapshot())
    }

    fn move_selection(&mut self, delta: isize) {
        let current = self.selection(self.focus);
        let count = self.board.count(self.focus);
        let next = if delta < 0 {
            current.saturating_sub(1)
        } else {
            (current + 1).min(count.saturating_sub(1))
        };
        self.selection[Self::column_of(self.focus)] = next;
    }

    const fn column_of(status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Cycles through the columns with wraparound.
    fn cycle(status: TaskStatus, steps: usize) -> TaskStatus {
        let index = (Self::column_of(status) + steps) % TaskStatus::ALL.len();
        TaskStatus::ALL[index]
    }

    /// Shifts one column left or right, saturating at the edges.
    fn shift(status: TaskStatus, delta: isize) -> TaskStatus {
        let index = Self::column_of(status);
        let shifted = if delta < 0 {
            index.saturating_sub(1)
        } else {
            (index + 1).min(TaskStatus::ALL.len() - 1)
        };
        TaskStatus::ALL[shifted]
    }
}
