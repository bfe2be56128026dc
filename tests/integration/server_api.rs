//! Integration tests for the termban server API and the HTTP store.
//!
//! Starts a real termban-server in-process on an OS-assigned port and
//! exercises both the raw REST surface and the client-side [`HttpStore`]
//! against it.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use termban::store::{HttpStore, TaskStore};
use termban_model::{Task, TaskStatus, fixture};
use termban_server::server;
use termban_server::store::BoardStore;

/// Starts a server and returns its base URL. Seeded by default; pass
/// `seeded = false` for an empty board.
async fn start_backend(seeded: bool) -> String {
    let store = if seeded {
        Arc::new(BoardStore::new())
    } else {
        Arc::new(BoardStore::empty())
    };
    let (addr, _handle) = server::start_server_with_state("127.0.0.1:0", store)
        .await
        .expect("failed to start test server");
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Raw REST surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_tasks_returns_the_seeded_fixture() {
    let base = start_backend(true).await;
    let tasks: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks, fixture::default_tasks());
}

#[tokio::test]
async fn post_creates_a_task_and_returns_it() {
    let base = start_backend(false).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/tasks"))
        .json(&serde_json::json!({ "content": "ship it", "status": "inProgress" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let created: Task = response.json().await.unwrap();
    assert_eq!(created.content, "ship it");
    assert_eq!(created.status, TaskStatus::InProgress);
    assert!(!created.id.as_str().is_empty());

    let tasks: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks, vec![created]);
}

#[tokio::test]
async fn blank_content_is_rejected_with_422() {
    let base = start_backend(false).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/tasks"))
        .json(&serde_json::json!({ "content": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn unknown_status_is_coerced_to_todo() {
    let base = start_backend(false).await;
    let client = reqwest::Client::new();

    let created: Task = client
        .post(format!("{base}/api/tasks"))
        .json(&serde_json::json!({ "content": "card", "status": "archived" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Todo);
}

#[tokio::test]
async fn delete_is_204_even_for_an_absent_id() {
    let base = start_backend(true).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/api/tasks/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    // Second delete of the same id: still 204.
    let response = client
        .delete(format!("{base}/api/tasks/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let tasks: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(tasks.iter().all(|t| t.id.as_str() != "1"));
}

#[tokio::test]
async fn reset_restores_the_fixture() {
    let base = start_backend(true).await;
    let client = reqwest::Client::new();

    client
        .delete(format!("{base}/api/tasks/1"))
        .send()
        .await
        .unwrap();
    let response = client
        .post(format!("{base}/api/reset-tasks"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let tasks: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks, fixture::default_tasks());
}

// ---------------------------------------------------------------------------
// HttpStore against a live backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn http_store_loads_the_seeded_collection() {
    let base = start_backend(true).await;
    let store = HttpStore::new(base);
    assert_eq!(store.load().await, fixture::default_tasks());
}

#[tokio::test]
async fn http_store_seeds_an_empty_backend_on_first_load() {
    let base = start_backend(false).await;
    let store = HttpStore::new(base.clone());

    assert_eq!(store.load().await, fixture::default_tasks());

    // The seed went through the API, so a raw GET sees it too.
    let tasks: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks, fixture::default_tasks());
}

#[tokio::test]
async fn http_store_save_diffs_adds_and_removals() {
    let base = start_backend(true).await;
    let store = HttpStore::new(base.clone());
    let mut tasks = store.load().await;

    // One removal, one addition, in a single save.
    let removed = tasks.remove(0);
    let added = Task::new("brand new card", TaskStatus::Done);
    tasks.push(added.clone());
    store.save(&tasks).await.unwrap();

    let on_server: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(on_server.iter().all(|t| t.id != removed.id));
    assert!(on_server.iter().any(|t| t.id == added.id));
    assert_eq!(on_server.len(), tasks.len());
}

#[tokio::test]
async fn http_store_save_is_stable_across_repeated_saves() {
    let base = start_backend(true).await;
    let store = HttpStore::new(base.clone());
    let mut tasks = store.load().await;

    tasks.push(Task::new("once", TaskStatus::Todo));
    store.save(&tasks).await.unwrap();
    // Saving the same collection again must not duplicate anything.
    store.save(&tasks).await.unwrap();

    let on_server: Vec<Task> = reqwest::get(format!("{base}/api/tasks"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(on_server.len(), tasks.len());
}

#[tokio::test]
async fn http_store_reset_returns_the_fixture() {
    let base = start_backend(true).await;
    let store = HttpStore::new(base);
    let mut tasks = store.load().await;

    tasks.push(Task::new("stray", TaskStatus::Done));
    store.save(&tasks).await.unwrap();

    let restored = store.reset().await.unwrap();
    assert_eq!(restored, fixture::default_tasks());
    assert_eq!(store.load().await, fixture::default_tasks());
}
