//! In-memory task collection behind the REST API.
//!
//! The [`BoardStore`] holds the ordered task list. Position within the
//! list is the only ordering the server knows about; the client derives
//! per-column order by filtering on status.

use serde::Deserialize;
use termban_model::{Task, TaskId, TaskStatus, fixture};
use tokio::sync::RwLock;

/// Request body for task creation.
///
/// Only `content` is required. Clients that generate their own ids (the
/// termban TUI does, so its diff-save stays stable) may send one; blank
/// ids are treated as absent.
#[derive(Debug, Deserialize)]
pub struct NewTask {
    /// Task card text.
    pub content: String,
    /// Client-generated id, if any.
    #[serde(default)]
    pub id: Option<String>,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Stage name; unknown or missing values fall back to `todo`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Thread-safe, ordered in-memory task collection.
pub struct BoardStore {
    tasks: RwLock<Vec<Task>>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Creates a store seeded with the default fixture tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(fixture::default_tasks()),
        }
    }

    /// Creates an empty store. Used in tests that exercise client-side
    /// seeding of a fresh backend.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tasks: RwLock::const_new(Vec::new()),
        }
    }

    /// Returns the full collection in storage order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Inserts a task from a creation request.
    ///
    /// Returns `None` when the content is blank. A non-blank client id is
    /// honored; posting an id that already exists replaces that task in
    /// place. Unknown statuses are coerced to `todo`.
    pub async fn insert(&self, new: NewTask) -> Option<Task> {
        if new.content.trim().is_empty() {
            return None;
        }
        let id = match new.id {
            Some(id) if !id.trim().is_empty() => TaskId::new(id),
            _ => TaskId::generate(),
        };
        let status = new
            .status
            .as_deref()
            .map_or(TaskStatus::Todo, TaskStatus::parse_or_default);
        let task = Task {
            id,
            content: new.content,
            description: new.description.filter(|d| !d.trim().is_empty()),
            status,
        };

        let mut tasks = self.tasks.write().await;
        if let Some(existing) = tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task.clone();
        } else {
            tasks.push(task.clone());
        }
        Some(task)
    }

    /// Removes the task with the given id, returning whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id.as_str() != id);
        tasks.len() < before
    }

    /// Replaces the collection with the default fixture tasks.
    pub async fn reset(&self) -> Vec<Task> {
        let fresh = fixture::default_tasks();
        *self.tasks.write().await = fresh.clone();
        fresh
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Whether the store holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(content: &str) -> NewTask {
        NewTask {
            content: content.to_string(),
            id: None,
            description: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn new_store_is_seeded_with_fixture_tasks() {
        let store = BoardStore::new();
        assert!(!store.is_empty().await);
        assert_eq!(store.list().await, fixture::default_tasks());
    }

    #[tokio::test]
    async fn empty_store_has_no_tasks() {
        let store = BoardStore::empty();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn insert_appends_and_generates_an_id() {
        let store = BoardStore::empty();
        let task = store.insert(new_task("write docs")).await.unwrap();
        assert!(!task.id.as_str().is_empty());
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn insert_honors_a_client_provided_id() {
        let store = BoardStore::empty();
        let task = store
            .insert(NewTask {
                id: Some("client-1".to_string()),
                ..new_task("card")
            })
            .await
            .unwrap();
        assert_eq!(task.id.as_str(), "client-1");
    }

    #[tokio::test]
    async fn insert_with_an_existing_id_replaces_in_place() {
        let store = BoardStore::empty();
        store
            .insert(NewTask {
                id: Some("x".to_string()),
                ..new_task("first")
            })
            .await
            .unwrap();
        store
            .insert(NewTask {
                id: Some("x".to_string()),
                ..new_task("second")
            })
            .await
            .unwrap();
        let tasks = store.list().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, "second");
    }

    #[tokio::test]
    async fn blank_content_is_rejected() {
        let store = BoardStore::empty();
        assert!(store.insert(new_task("   ")).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_status_is_coerced_to_todo() {
        let store = BoardStore::empty();
        let task = store
            .insert(NewTask {
                status: Some("archived".to_string()),
                ..new_task("card")
            })
            .await
            .unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = BoardStore::empty();
        let task = store.insert(new_task("card")).await.unwrap();
        assert!(store.remove(task.id.as_str()).await);
        assert!(!store.remove(task.id.as_str()).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn reset_restores_the_fixture() {
        let store = BoardStore::empty();
        store.insert(new_task("stray")).await.unwrap();
        let tasks = store.reset().await;
        assert_eq!(tasks, fixture::default_tasks());
        assert_eq!(store.list().await, tasks);
    }
}
