//! Termban — terminal kanban board library.

pub mod app;
pub mod board;
pub mod config;
pub mod persist;
pub mod store;
pub mod ui;
