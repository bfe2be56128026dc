//! The in-memory board: task collection, mutation operations, and the
//! drop-reorder algorithm.
//!
//! The [`Board`] is an explicitly owned value injected into the UI
//! layer. All stage/order semantics live here; rendering and
//! persistence are layered on top.

pub mod controller;
pub mod reorder;

pub use controller::{Board, EditOutcome};
pub use reorder::{DropEvent, Slot, apply_drop};
