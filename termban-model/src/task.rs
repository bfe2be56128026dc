//! Core task types: status, identifier, and the task record itself.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three fixed workflow stages a task belongs to.
///
/// The serde renames pin the wire literals (`"todo"`, `"inProgress"`,
/// `"done"`) used by the JSON data file, the REST API, and the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has not been started.
    #[serde(rename = "todo")]
    Todo,
    /// Task is actively being worked on.
    #[serde(rename = "inProgress")]
    InProgress,
    /// Task has been completed.
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// All stages in board column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the wire literal for this stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Returns the column title shown in the UI.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "TO DO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Parses a wire literal, returning `None` for anything unknown.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Whether `s` is one of the three stage literals.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_some()
    }

    /// Parses a wire literal, coercing anything unknown to [`Self::Todo`].
    ///
    /// Legacy or hand-edited data can carry stray status strings; those
    /// records land back in the first column instead of being rejected.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Todo)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque unique task identifier.
///
/// Freshly created tasks get a time-ordered UUID v7 string, but any
/// non-empty string loaded from persisted data is a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh time-ordered identifier (UUID v7).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single card on the board.
///
/// A task carries exactly one [`TaskStatus`] at all times; stage
/// membership is a field, not a container, so a task can never appear in
/// two columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: TaskId,
    /// Short text label. Non-empty; enforced by the board on every save.
    pub content: String,
    /// Optional longer free-form text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The stage this task currently belongs to.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task with a freshly generated id and no description.
    #[must_use]
    pub fn new(content: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::generate(),
            content: content.into(),
            description: None,
            status,
        }
    }
}
