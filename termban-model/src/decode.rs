//! Defensive decoding of persisted and fixture task data.
//!
//! Persisted collections can come from older app versions, hand edits,
//! or a partially written file. Decoding repairs records field by field
//! — a missing id is synthesized, an unknown status is coerced to
//! `todo` — instead of rejecting the whole collection for one bad
//! record. Text that is not a JSON document of the expected shape is
//! treated as "no data" by callers.

use serde_json::Value;

use crate::task::{Task, TaskId, TaskStatus};

/// Decodes a persisted collection: a JSON array of task records.
///
/// Returns `None` when the text is not parseable JSON or not an array;
/// callers treat that as an empty store. Individual malformed records
/// are repaired or dropped per [`decode_record`].
#[must_use]
pub fn decode_collection(text: &str) -> Option<Vec<Task>> {
    let value: Value = serde_json::from_str(text).ok()?;
    let records = value.as_array()?;
    Some(records.iter().filter_map(decode_record).collect())
}

/// Decodes a fixture document: `{ "tasks": [ ... ] }`.
///
/// Same per-record rules as [`decode_collection`]; returns `None` when
/// the wrapper object or its `tasks` array is missing.
#[must_use]
pub fn decode_fixture(text: &str) -> Option<Vec<Task>> {
    let value: Value = serde_json::from_str(text).ok()?;
    let records = value.get("tasks")?.as_array()?;
    Some(records.iter().filter_map(decode_record).collect())
}

/// Decodes a single task record, repairing what can be repaired.
///
/// - missing or non-string `id`: a fresh id is synthesized
/// - missing or unknown `status`: coerced to `todo`
/// - missing, non-string, or blank `content`: the record is dropped —
///   it cannot satisfy the non-empty-content invariant
/// - unknown fields are ignored
#[must_use]
pub fn decode_record(value: &Value) -> Option<Task> {
    let record = value.as_object()?;

    let content = record.get("content").and_then(Value::as_str)?;
    if content.trim().is_empty() {
        return None;
    }

    let id = record
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map_or_else(TaskId::generate, TaskId::new);

    let status = record
        .get("status")
        .and_then(Value::as_str)
        .map_or(TaskStatus::Todo, TaskStatus::parse_or_default);

    let description = record
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Some(Task {
        id,
        content: content.to_owned(),
        description,
        status,
    })
}
