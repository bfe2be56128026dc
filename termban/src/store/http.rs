//! REST store: the backend-persistence variant.
//!
//! Talks to a termban-server instance. The API surface is per-task
//! (`POST` one, `DELETE` one) with no bulk replace and no update
//! endpoint, so `save` diffs the collection against the last known
//! server id set: adds become `POST`s, removals become `DELETE`s, and a
//! pure edit or reorder is not representable on the backend (it is
//! logged and reconciled only by `reset`). Each user mutation therefore
//! issues at most one request, fire-and-forget from the UI's viewpoint.

use std::collections::HashSet;

use async_trait::async_trait;
use termban_model::{Task, TaskId, decode, fixture};
use tokio::sync::Mutex;

use super::{StoreError, TaskStore};

/// HTTP-backed task store.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    /// Ids known to exist on the server; `save` diffs against this.
    known_ids: Mutex<HashSet<TaskId>>,
}

impl HttpStore {
    /// Creates a store for the given backend base URL
    /// (e.g. `http://127.0.0.1:7700`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            known_ids: Mutex::new(HashSet::new()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetches and defensively decodes the full backend collection.
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        let text = self
            .client
            .get(self.url("/api/tasks"))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        // Records are repaired individually; a malformed body is an
        // empty collection, not a hard failure.
        Ok(decode::decode_collection(&text).unwrap_or_default())
    }

    async fn post_task(&self, task: &Task) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.url("/api/tasks"))
            .json(task)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::UnexpectedStatus {
                status: response.status().as_u16(),
                context: "POST /api/tasks",
            })
        }
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::UnexpectedStatus {
                status: response.status().as_u16(),
                context: "DELETE /api/tasks/{id}",
            })
        }
    }

    /// Seeds an empty backend from the bundled fixture, preserving the
    /// fixture ids so later diffs stay stable.
    async fn seed(&self) -> Result<Vec<Task>, StoreError> {
        tracing::info!("backend is empty, seeding from fixture");
        for task in fixture::default_tasks() {
            self.post_task(&task).await?;
        }
        self.fetch_all().await
    }

    async fn remember(&self, tasks: &[Task]) {
        *self.known_ids.lock().await = tasks.iter().map(|t| t.id.clone()).collect();
    }
}

#[async_trait]
impl TaskStore for HttpStore {
    async fn load(&self) -> Vec<Task> {
        let tasks = match self.fetch_all().await {
            Ok(tasks) if tasks.is_empty() => match self.seed().await {
                Ok(seeded) => seeded,
                Err(e) => {
                    tracing::warn!(error = %e, "could not seed backend");
                    Vec::new()
                }
            },
            Ok(tasks) => tasks,
            Err(e) => {
                // In-memory state stays authoritative for the session.
                tracing::warn!(error = %e, "could not reach backend, starting with an empty board");
                Vec::new()
            }
        };
        self.remember(&tasks).await;
        tasks
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let current: HashSet<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();
        let mut known = self.known_ids.lock().await;

        for task in tasks {
            if !known.contains(&task.id) {
                self.post_task(task).await?;
            }
        }
        let removed: Vec<TaskId> = known.difference(&current).cloned().collect();
        for id in &removed {
            self.delete_task(id).await?;
        }
        if *known == current {
            tracing::debug!("edit or reorder only, not representable on the backend API");
        }

        *known = current;
        Ok(())
    }

    async fn reset(&self) -> Result<Vec<Task>, StoreError> {
        let response = self
            .client
            .post(self.url("/api/reset-tasks"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: response.status().as_u16(),
                context: "POST /api/reset-tasks",
            });
        }
        let tasks = self.fetch_all().await?;
        self.remember(&tasks).await;
        Ok(tasks)
    }

    fn label(&self) -> &'static str {
        "server"
    }
}
