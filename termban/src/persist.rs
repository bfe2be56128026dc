//! Persistence coordinator bridging the TUI loop to the async stores.
//!
//! The poll-based TUI event loop never awaits a store call directly;
//! it sends [`StoreCommand`]s into a background tokio task and drains
//! [`StoreEvent`]s on each tick.
//!
//! ```text
//! TUI (main thread)  ←── StoreEvent ───  tokio background task
//!                     ─── StoreCommand →
//! ```
//!
//! Saves are fire-and-forget: the in-memory board is updated before the
//! command is even sent, and a failed save only logs and flips the
//! "unsaved" indicator — in-memory state stays the source of truth for
//! the session.

use std::sync::Arc;

use termban_model::Task;
use tokio::sync::mpsc;

use crate::store::TaskStore;

/// Default capacity for the command and event channels.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Commands sent from the TUI main loop to the store task.
#[derive(Debug)]
pub enum StoreCommand {
    /// Overwrite persisted state with this snapshot of the collection.
    Save(Vec<Task>),
    /// Discard persisted state and reseed from the fixture.
    Reset,
    /// Stop the store task.
    Shutdown,
}

/// Events sent from the store task back to the TUI main loop.
#[derive(Debug)]
pub enum StoreEvent {
    /// The last save completed.
    SaveOk,
    /// The last save failed; in-memory state is now ahead of the store.
    SaveFailed(String),
    /// Reset completed; the board should replace its collection.
    ResetDone(Vec<Task>),
    /// Reset failed; the board is unchanged.
    ResetFailed(String),
}

/// Spawns the store background task and returns the channel handles.
#[must_use]
pub fn spawn_store(
    store: Arc<dyn TaskStore>,
    capacity: usize,
) -> (mpsc::Sender<StoreCommand>, mpsc::Receiver<StoreEvent>) {
    let (cmd_tx, mut cmd_rx) = mpsc::channel(capacity);
    let (evt_tx, evt_rx) = mpsc::channel(capacity);

    tokio::spawn(async move {
        while let Some(command) = cmd_rx.recv().await {
            match command {
                StoreCommand::Save(tasks) => match store.save(&tasks).await {
                    Ok(()) => {
                        tracing::debug!(count = tasks.len(), "collection saved");
                        let _ = evt_tx.send(StoreEvent::SaveOk).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "save failed, in-memory state stays authoritative");
                        let _ = evt_tx.send(StoreEvent::SaveFailed(e.to_string())).await;
                    }
                },
                StoreCommand::Reset => match store.reset().await {
                    Ok(tasks) => {
                        tracing::info!(count = tasks.len(), "store reset from fixture");
                        let _ = evt_tx.send(StoreEvent::ResetDone(tasks)).await;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "reset failed");
                        let _ = evt_tx.send(StoreEvent::ResetFailed(e.to_string())).await;
                    }
                },
                StoreCommand::Shutdown => break,
            }
        }
        tracing::debug!("store coordinator stopped");
    });

    (cmd_tx, evt_rx)
}
