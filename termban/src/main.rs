//! Termban — terminal kanban board.
//!
//! Launches the TUI over a local JSON data file, or over a
//! termban-server backend when one is configured. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/termban/config.toml`).
//!
//! ```bash
//! # Local file storage (default)
//! cargo run --bin termban
//!
//! # Persist through a termban-server backend
//! cargo run --bin termban -- --server-url http://127.0.0.1:7700
//!
//! # Or via environment variable
//! TERMBAN_SERVER=http://127.0.0.1:7700 cargo run --bin termban
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use termban::app::{App, SyncState};
use termban::board::Board;
use termban::config::{CliArgs, ClientConfig};
use termban::persist::{self, StoreCommand};
use termban::store::{FileStore, HttpStore, TaskStore};
use termban::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termban starting");

    let store = build_store(&config);
    tracing::info!(store = store.label(), "task store selected");

    // Load the collection before the terminal takes over, so a slow
    // backend shows up on the launching shell rather than a blank UI.
    let tasks = store.load().await;
    let label = store.label();

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, store, Board::new(tasks), label, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("termban exiting");
    result
}

/// Select the store backend from the resolved configuration.
fn build_store(config: &ClientConfig) -> Arc<dyn TaskStore> {
    if let Some(url) = &config.server_url {
        return Arc::new(HttpStore::new(url.clone()));
    }
    let path = config
        .data_file
        .clone()
        .or_else(FileStore::default_path)
        .unwrap_or_else(|| PathBuf::from("termban-tasks.json"));
    Arc::new(FileStore::new(path))
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termban.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: Arc<dyn TaskStore>,
    board: Board,
    store_label: &'static str,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new(board, store_label);
    let (cmd_tx, mut evt_rx) = persist::spawn_store(store, config.channel_capacity);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Drain all pending store events (non-blocking).
        while let Ok(event) = evt_rx.try_recv() {
            app.apply_store_event(event);
        }

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event returns Some(StoreCommand) when the
            // gesture changed the board or requested a reset.
            if let Some(command) = app.handle_key_event(key) {
                match cmd_tx.try_send(command) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        // In-memory state is already updated; the next
                        // mutation will save the full collection anyway.
                        app.sync = SyncState::Unsaved;
                        app.status_note = Some("persistence busy, change not saved yet".to_string());
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        app.sync = SyncState::Unsaved;
                        app.status_note = Some("persistence stopped".to_string());
                    }
                }
            }
        }

        if app.should_quit {
            let _ = cmd_tx.try_send(StoreCommand::Shutdown);
            return Ok(());
        }
    }
}
