//! Terminal UI rendering.

pub mod column;
pub mod input_bar;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use termban_model::TaskStatus;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // Board on top, input bar below it, status bar at the bottom.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // One column per workflow stage.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(main_chunks[0]);

    for (i, status) in TaskStatus::ALL.into_iter().enumerate() {
        column::render(frame, columns[i], app, status);
    }

    input_bar::render(frame, main_chunks[1], app);
    status_bar::render(frame, main_chunks[2], app);
}
