//! Status bar rendering: store backend, sync indicator, counts.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use termban_model::TaskStatus;

use super::theme;
use crate::app::{App, SyncState};

/// Render the one-line status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (sync_text, sync_style) = match app.sync {
        SyncState::Saved => ("\u{2713} saved", theme::sync_ok()),
        SyncState::Saving => ("\u{22ef} saving", theme::dimmed()),
        SyncState::Unsaved => ("! unsaved", theme::sync_warning()),
    };

    let counts = format!(
        "{} todo \u{00b7} {} in progress \u{00b7} {} done",
        app.board.count(TaskStatus::Todo),
        app.board.count(TaskStatus::InProgress),
        app.board.count(TaskStatus::Done),
    );

    let mut spans = vec![
        Span::raw(format!(" store: {} \u{2502} ", app.store_label)),
        Span::styled(sync_text, sync_style),
        Span::raw(format!(" \u{2502} {counts} ")),
    ];
    if let Some(note) = &app.status_note {
        spans.push(Span::styled(format!("\u{2502} {note} "), theme::dimmed()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(theme::status_bar_bg()),
        area,
    );
}
