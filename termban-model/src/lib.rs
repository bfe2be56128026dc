//! Shared task data model for Termban.
//!
//! Both the TUI client and the REST server depend on this crate so that
//! the disk format, the HTTP wire format, and the bundled fixture all go
//! through the same types and the same defensive decoding rules.

pub mod decode;
pub mod fixture;
pub mod task;

pub use task::{Task, TaskId, TaskStatus};
