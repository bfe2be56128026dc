//! End-to-end board flow over file-backed storage.
//!
//! Drives the board through add / edit / move / delete / reset the way
//! the key handler does, persisting through a real [`FileStore`] on a
//! temp directory, and checks what a fresh load sees.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use termban::board::{Board, DropEvent, EditOutcome, Slot};
use termban::store::{FileStore, TaskStore};
use termban_model::{TaskStatus, fixture};

fn store_in(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path().join("tasks.json"))
}

#[tokio::test]
async fn fresh_store_seeds_the_default_board() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let board = Board::new(store.load().await);
    assert_eq!(board.tasks(), fixture::default_tasks().as_slice());
    assert!(store.path().exists(), "seeding should write the data file");
}

#[tokio::test]
async fn add_edit_delete_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut board = Board::new(store.load().await);

    let added = board
        .add("write the changelog", None, TaskStatus::InProgress)
        .expect("non-blank add");
    let doomed = board.by_status(TaskStatus::Todo)[0].id.clone();
    assert!(board.delete(&doomed));
    assert_eq!(
        board.commit_edit(&added.id, "write and publish the changelog"),
        EditOutcome::Updated
    );
    store.save(&board.snapshot()).await.unwrap();

    let reloaded = Board::new(store.load().await);
    assert_eq!(reloaded, board);
    let edited = reloaded.get(&added.id).unwrap();
    assert_eq!(edited.content, "write and publish the changelog");
    assert_eq!(edited.status, TaskStatus::InProgress);
    assert!(reloaded.get(&doomed).is_none());
}

#[tokio::test]
async fn moves_keep_their_order_across_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut board = Board::new(store.load().await);

    // Move the last todo task to the top of "done".
    let todo = board.by_status(TaskStatus::Todo);
    let moving = todo.last().unwrap().id.clone();
    let source = Slot::new(TaskStatus::Todo, todo.len() - 1);
    let changed = board.apply_drop(&DropEvent {
        task_id: moving.clone(),
        source,
        destination: Some(Slot::new(TaskStatus::Done, 0)),
    });
    assert!(changed);
    store.save(&board.snapshot()).await.unwrap();

    let reloaded = Board::new(store.load().await);
    let done = reloaded.by_status(TaskStatus::Done);
    assert_eq!(done[0].id, moving);
    assert_eq!(reloaded, board);
}

#[tokio::test]
async fn reset_discards_saved_changes() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut board = Board::new(store.load().await);

    board.add("ephemeral", None, TaskStatus::Done).unwrap();
    store.save(&board.snapshot()).await.unwrap();

    let restored = store.reset().await.unwrap();
    assert_eq!(restored, fixture::default_tasks());

    // The reset state is what the next session loads.
    assert_eq!(store.load().await, fixture::default_tasks());
}

#[tokio::test]
async fn blank_edit_deletes_and_the_deletion_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut board = Board::new(store.load().await);
    let before = board.len();

    let id = board.by_status(TaskStatus::Todo)[0].id.clone();
    assert_eq!(board.commit_edit(&id, "   "), EditOutcome::Deleted);
    store.save(&board.snapshot()).await.unwrap();

    let reloaded = Board::new(store.load().await);
    assert_eq!(reloaded.len(), before - 1);
    assert!(reloaded.get(&id).is_none());
}
