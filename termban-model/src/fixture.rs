//! Bundled default task set used to seed an empty store.

use crate::decode;
use crate::task::Task;

/// Raw JSON of the bundled fixture (`{ "tasks": [ ... ] }` format).
pub const INITIAL_TASKS_JSON: &str = include_str!("../assets/initial-tasks.json");

/// Decodes the bundled fixture into the default task set.
///
/// The fixture ships inside the binary, so a decode failure would be a
/// packaging defect; falling back to an empty board beats panicking.
#[must_use]
pub fn default_tasks() -> Vec<Task> {
    decode::decode_fixture(INITIAL_TASKS_JSON).unwrap_or_default()
}
