//! Board controller: owns the task collection and applies mutations.

use termban_model::{Task, TaskId, TaskStatus};

use super::reorder::{self, DropEvent};

/// Outcome of committing an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The content was updated in place.
    Updated,
    /// The new content was blank, so the task was deleted instead.
    Deleted,
    /// No task with that id exists; nothing happened.
    NotFound,
}

/// The in-memory task collection.
///
/// Tasks live in a single sequence conceptually partitioned into three
/// ordered per-stage sub-sequences; within-stage order is display order
/// and is preserved across every mutation. The board is the exclusive
/// owner of in-memory state — persistence only ever sees snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    /// Creates a board over an already-loaded collection.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in internal storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Clones the collection for a persistence call.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Replaces the whole collection (after a reset).
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The ordered sequence of tasks in one stage.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Number of tasks in one stage.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Looks a task up by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Adds a task to the end of its stage's sequence and returns it.
    ///
    /// Empty or whitespace-only content is silently rejected (`None`) —
    /// validation failures are not errors here, just no-ops.
    pub fn add(
        &mut self,
        content: &str,
        description: Option<String>,
        status: TaskStatus,
    ) -> Option<Task> {
        if content.trim().is_empty() {
            return None;
        }
        let mut task = Task::new(content, status);
        task.description = description.filter(|d| !d.trim().is_empty());
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Commits an edit to a task's content.
    ///
    /// Blank content means delete — saving an empty edit removes the
    /// task rather than erroring. Otherwise the content changes in
    /// place, preserving id, stage, and position. Unknown ids are
    /// no-ops.
    pub fn commit_edit(&mut self, id: &TaskId, new_content: &str) -> EditOutcome {
        if new_content.trim().is_empty() {
            return if self.delete(id) {
                EditOutcome::Deleted
            } else {
                EditOutcome::NotFound
            };
        }
        match self.tasks.iter_mut().find(|t| t.id == *id) {
            Some(task) => {
                task.content = new_content.to_owned();
                EditOutcome::Updated
            }
            None => EditOutcome::NotFound,
        }
    }

    /// Deletes a task by id. Idempotent: deleting an absent id returns
    /// `false` and changes nothing.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != *id);
        self.tasks.len() != before
    }

    /// Applies a drop event; see [`reorder::apply_drop`].
    pub fn apply_drop(&mut self, event: &DropEvent) -> bool {
        reorder::apply_drop(&mut self.tasks, event)
    }
}
