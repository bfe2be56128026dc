//! Input bar: add/edit text entry and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, Mode};

/// Render the input bar. While typing it shows the edit buffer with the
/// terminal cursor; otherwise it shows key hints for the current mode.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (title, text, style) = match &app.mode {
        Mode::AddInput { status } => (
            format!(" Add task \u{2192} {} (Tab switches column) ", status.title()),
            app.input.clone(),
            theme::normal(),
        ),
        Mode::EditInput { .. } => (
            " Edit task (Enter saves, blank deletes, Esc cancels) ".to_string(),
            app.input.clone(),
            theme::normal(),
        ),
        Mode::Grabbed { .. } => (
            " Moving ".to_string(),
            "arrows/hjkl move \u{00b7} Space/Enter drop \u{00b7} Esc cancel".to_string(),
            theme::dimmed(),
        ),
        Mode::Normal => (
            " Keys ".to_string(),
            "a add \u{00b7} Enter edit \u{00b7} d delete \u{00b7} Space grab \u{00b7} R reset \u{00b7} q quit"
                .to_string(),
            theme::dimmed(),
        ),
    };

    let typing = matches!(app.mode, Mode::AddInput { .. } | Mode::EditInput { .. });
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if typing {
            theme::highlighted()
        } else {
            theme::dimmed()
        });
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);

    if typing {
        // Cursor column is an approximation for wide glyphs; fine for a
        // single-line input.
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(u16::try_from(app.cursor_position).unwrap_or(u16::MAX));
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
