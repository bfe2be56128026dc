//! JSON-file store: the embedded-persistence backend.
//!
//! The whole collection lives in one document —
//! `{ "tasks": [ ... ] }` — at a single path (default
//! `~/.local/share/termban/tasks.json`). A missing or unparsable file
//! is "no data" and triggers a reseed from the bundled fixture.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use termban_model::{Task, decode, fixture};

use super::{StoreError, TaskStore};

/// File-backed task store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given data file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform default data file location.
    ///
    /// `None` when the user data directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("termban").join("tasks.json"))
    }

    /// The path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full document, temp-file-then-rename so a crash can
    /// never leave a half-written data file behind.
    async fn write_document(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let document = serde_json::json!({ "tasks": tasks });
        let text = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::WriteFile {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, text)
            .await
            .map_err(|source| StoreError::WriteFile {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::WriteFile {
                path: self.path.clone(),
                source,
            })
    }

    /// Reseeds the data file from the bundled fixture.
    async fn seed(&self) -> Vec<Task> {
        let tasks = fixture::default_tasks();
        if let Err(e) = self.write_document(&tasks).await {
            tracing::warn!(error = %e, "could not write seeded data file");
        }
        tasks
    }
}

#[async_trait]
impl TaskStore for FileStore {
    async fn load(&self) -> Vec<Task> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                if let Some(tasks) = decode::decode_fixture(&text) {
                    return tasks;
                }
                tracing::warn!(
                    path = %self.path.display(),
                    "data file is not a task document, reseeding from fixture"
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file yet, seeding from fixture");
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read data file, reseeding from fixture");
            }
        }
        self.seed().await
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        self.write_document(tasks).await
    }

    async fn reset(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = fixture::default_tasks();
        self.write_document(&tasks).await?;
        Ok(tasks)
    }

    fn label(&self) -> &'static str {
        "file"
    }
}
