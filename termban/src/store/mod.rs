//! Task persistence: the store contract and its file and HTTP backends.

pub mod file;
pub mod http;

pub use file::FileStore;
pub use http::HttpStore;

use std::path::PathBuf;

use async_trait::async_trait;
use termban_model::Task;

/// Errors surfaced by store writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to write the data file.
    #[error("failed to write data file {path}: {source}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to encode the collection as JSON.
    #[error("failed to encode tasks: {0}")]
    Encode(#[from] serde_json::Error),

    /// An HTTP request to the backend failed outright.
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an unexpected status code.
    #[error("backend returned {status} for {context}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// Which call produced it.
        context: &'static str,
    },
}

/// Durable persistence for the task collection.
///
/// The store is the only component touching the durable medium.
/// `load` never fails visibly: absent or corrupted state is treated as
/// "no data" and reseeds from the bundled fixture. `save` overwrites
/// the full collection; partial writes are never observable to the
/// caller.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads all persisted tasks, reseeding from the fixture when
    /// there is nothing usable.
    async fn load(&self) -> Vec<Task>;

    /// Overwrites the persisted collection with `tasks`.
    async fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;

    /// Discards persisted state, reseeds from the fixture, and returns
    /// the reseeded collection.
    async fn reset(&self) -> Result<Vec<Task>, StoreError>;

    /// Short backend name for the status bar (e.g. `"file"`).
    fn label(&self) -> &'static str;
}
