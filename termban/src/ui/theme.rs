//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};
use termban_model::TaskStatus;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for the focused column.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success indicator color (saved state).
pub const SUCCESS: Color = Color::Green;

/// Warning indicator color (unsaved state).
pub const WARNING: Color = Color::Yellow;

/// Accent color per stage column.
#[must_use]
pub const fn column_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Blue,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Done => Color::Green,
    }
}

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (hints, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Highlighted style (focused column border).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected card style.
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the card currently being moved.
#[must_use]
pub fn grabbed() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(WARNING)
        .add_modifier(Modifier::BOLD)
}

/// Style for the drop-target marker line.
#[must_use]
pub fn drop_target() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::ITALIC)
}

/// Style for the saved indicator.
#[must_use]
pub fn sync_ok() -> Style {
    Style::default().fg(SUCCESS)
}

/// Style for the unsaved indicator.
#[must_use]
pub fn sync_warning() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
