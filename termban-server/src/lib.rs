//! Termban server library.
//!
//! Exposes the REST backend for use in tests and embedding. The server
//! keeps the task collection in memory and serves the small JSON API the
//! termban client talks to.

pub mod config;
pub mod server;
pub mod store;
