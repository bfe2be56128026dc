//! The drop-reorder algorithm: what happens when a grabbed task lands.

use termban_model::{Task, TaskId, TaskStatus};

/// A position on the board: a stage and an index within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The stage the slot belongs to.
    pub status: TaskStatus,
    /// Index within the stage's ordered sequence.
    pub index: usize,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// The gesture ending a drag: which task moved, where it came from, and
/// where it was dropped. `destination` is `None` for a cancelled drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// Identity of the dragged task. The slot indices are position
    /// hints only; the id is the identity key.
    pub task_id: TaskId,
    /// Where the drag started.
    pub source: Slot,
    /// Where the task was dropped, or `None` when the drag was cancelled.
    pub destination: Option<Slot>,
}

/// Applies a drop event to the collection, returning whether anything
/// changed. Callers persist only on `true`.
///
/// A cancelled drop, a drop onto the task's own slot, or an unknown
/// task id all leave the collection untouched. Otherwise the task is
/// removed, reassigned to the destination stage, and inserted at the
/// destination index clamped to `[0, len]` of the destination sequence.
/// Stages other than the destination keep their relative order; the
/// order of concatenation across stages is not externally meaningful.
pub fn apply_drop(tasks: &mut Vec<Task>, event: &DropEvent) -> bool {
    let Some(dest) = event.destination else {
        return false;
    };
    if dest == event.source {
        return false;
    }
    let Some(position) = tasks.iter().position(|t| t.id == event.task_id) else {
        tracing::debug!(task_id = %event.task_id, "dropped task is no longer on the board");
        return false;
    };

    let mut moved = tasks.remove(position);
    moved.status = dest.status;

    // Partition preserves relative order within both halves, so every
    // stage except the destination is untouched.
    let (mut dest_seq, rest): (Vec<Task>, Vec<Task>) =
        std::mem::take(tasks).into_iter().partition(|t| t.status == dest.status);
    let index = dest.index.min(dest_seq.len());
    dest_seq.insert(index, moved);

    tasks.extend(rest);
    tasks.extend(dest_seq);
    true
}
