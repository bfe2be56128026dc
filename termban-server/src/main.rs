//! Termban server -- in-memory REST backend for the termban TUI.
//!
//! Serves the task collection over a small JSON API. State lives in
//! memory only; restarting the server restores the default board.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 127.0.0.1:7700
//! cargo run --bin termban-server
//!
//! # Run on custom address
//! cargo run --bin termban-server -- --bind 0.0.0.0:8080
//!
//! # Start with an empty board
//! cargo run --bin termban-server -- --no-seed
//! ```

use std::sync::Arc;

use clap::Parser;
use termban_server::config::{ServerCliArgs, ServerConfig};
use termban_server::server;
use termban_server::store::BoardStore;

#[tokio::main]
async fn main() {
    let cli = ServerCliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match ServerConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting termban server");

    let store = if config.seed_defaults {
        Arc::new(BoardStore::new())
    } else {
        Arc::new(BoardStore::empty())
    };

    match server::start_server_with_state(&config.bind_addr, store).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "termban server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start server");
            std::process::exit(1);
        }
    }
}
