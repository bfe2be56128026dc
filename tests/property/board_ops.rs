//! Property-based tests for board mutations.
//!
//! Uses proptest to drive random operation sequences against the board
//! and check the structural invariants: every task carries exactly one
//! stage, ids are conserved (no duplication, no loss except explicit
//! deletes), and untouched stages keep their order.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use termban::board::{Board, DropEvent, Slot};
use termban_model::{Task, TaskId, TaskStatus};

/// One randomized board operation.
#[derive(Debug, Clone)]
enum Op {
    Add { content: String, status: TaskStatus },
    Edit { pick: usize, content: String },
    Delete { pick: usize },
    Drop { pick: usize, status: TaskStatus, index: usize },
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop::sample::select(TaskStatus::ALL.as_slice())
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (".{0,20}", arb_status()).prop_map(|(content, status)| Op::Add { content, status }),
        (any::<usize>(), ".{0,20}").prop_map(|(pick, content)| Op::Edit { pick, content }),
        any::<usize>().prop_map(|pick| Op::Delete { pick }),
        (any::<usize>(), arb_status(), 0..16usize)
            .prop_map(|(pick, status, index)| Op::Drop { pick, status, index }),
    ]
}

fn seed_board() -> Board {
    Board::new(
        (0..6)
            .map(|n| Task {
                id: TaskId::new(format!("seed-{n}")),
                content: format!("seed task {n}"),
                description: None,
                status: TaskStatus::ALL[n % 3],
            })
            .collect(),
    )
}

/// Picks an existing task id by wrapping an arbitrary index.
fn pick_id(board: &Board, pick: usize) -> Option<TaskId> {
    let tasks = board.tasks();
    if tasks.is_empty() {
        return None;
    }
    Some(tasks[pick % tasks.len()].id.clone())
}

fn slot_of(board: &Board, id: &TaskId) -> Slot {
    let task = board.get(id).unwrap();
    let index = board
        .by_status(task.status)
        .iter()
        .position(|t| t.id == *id)
        .unwrap();
    Slot::new(task.status, index)
}

fn apply(board: &mut Board, op: Op) {
    match op {
        Op::Add { content, status } => {
            board.add(&content, None, status);
        }
        Op::Edit { pick, content } => {
            if let Some(id) = pick_id(board, pick) {
                board.commit_edit(&id, &content);
            }
        }
        Op::Delete { pick } => {
            if let Some(id) = pick_id(board, pick) {
                board.delete(&id);
            }
        }
        Op::Drop { pick, status, index } => {
            if let Some(id) = pick_id(board, pick) {
                let source = slot_of(board, &id);
                board.apply_drop(&DropEvent {
                    task_id: id,
                    source,
                    destination: Some(Slot::new(status, index)),
                });
            }
        }
    }
}

proptest! {
    /// Stage counts always sum to the total: a task is in exactly one
    /// column, never zero, never two.
    #[test]
    fn every_task_is_in_exactly_one_stage(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut board = seed_board();
        for op in ops {
            apply(&mut board, op);
            let by_stage: usize = TaskStatus::ALL.iter().map(|s| board.count(*s)).sum();
            prop_assert_eq!(by_stage, board.len());
        }
    }

    /// Ids stay unique through any operation sequence.
    #[test]
    fn ids_are_never_duplicated(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut board = seed_board();
        for op in ops {
            apply(&mut board, op);
            let mut ids: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), board.len());
        }
    }

    /// A drop moves exactly one task: the id set is unchanged and the
    /// task ends up in the destination stage.
    #[test]
    fn drops_conserve_the_id_set(
        pick in any::<usize>(),
        status in arb_status(),
        index in 0..16usize,
    ) {
        let mut board = seed_board();
        let mut before: Vec<String> = board.tasks().iter().map(|t| t.id.to_string()).collect();
        let id = pick_id(&board, pick).unwrap();
        let source = slot_of(&board, &id);

        board.apply_drop(&DropEvent {
            task_id: id.clone(),
            source,
            destination: Some(Slot::new(status, index)),
        });

        let mut after: Vec<String> = board.tasks().iter().map(|t| t.id.to_string()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
        prop_assert_eq!(board.get(&id).unwrap().status, status);
    }

    /// Stages not involved in a drop keep their exact order.
    #[test]
    fn drops_leave_other_stages_untouched(
        pick in any::<usize>(),
        status in arb_status(),
        index in 0..16usize,
    ) {
        let mut board = seed_board();
        let id = pick_id(&board, pick).unwrap();
        let source = slot_of(&board, &id);
        let untouched: Vec<TaskStatus> = TaskStatus::ALL
            .iter()
            .copied()
            .filter(|s| *s != source.status && *s != status)
            .collect();
        let before: Vec<Vec<TaskId>> = untouched
            .iter()
            .map(|s| board.by_status(*s).iter().map(|t| t.id.clone()).collect())
            .collect();

        board.apply_drop(&DropEvent {
            task_id: id,
            source,
            destination: Some(Slot::new(status, index)),
        });

        for (stage, expected) in untouched.iter().zip(before) {
            let now: Vec<TaskId> = board
                .by_status(*stage)
                .iter()
                .map(|t| t.id.clone())
                .collect();
            prop_assert_eq!(now, expected);
        }
    }

    /// A cancelled drop (no destination) changes nothing, whatever the
    /// rest of the event says.
    #[test]
    fn cancelled_drops_are_no_ops(pick in any::<usize>()) {
        let mut board = seed_board();
        let id = pick_id(&board, pick).unwrap();
        let source = slot_of(&board, &id);
        let before = board.clone();

        let changed = board.apply_drop(&DropEvent {
            task_id: id,
            source,
            destination: None,
        });

        prop_assert!(!changed);
        prop_assert_eq!(board, before);
    }
}
