//! Board column rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use termban_model::TaskStatus;

use super::theme;
use crate::app::{App, Mode};

/// Render one stage column with its task cards.
pub fn render(frame: &mut Frame, area: Rect, app: &App, status: TaskStatus) {
    let tasks = app.board.by_status(status);
    let focused = app.focus == status;
    let selection = app.selection(status);

    let mut items: Vec<ListItem> = Vec::with_capacity(tasks.len() + 1);
    for (index, task) in tasks.iter().enumerate() {
        let grabbed =
            matches!(&app.mode, Mode::Grabbed { task_id, .. } if *task_id == task.id);
        let selected = focused && index == selection && app.mode == Mode::Normal;

        let style = if grabbed {
            theme::grabbed()
        } else if selected {
            theme::selected()
        } else {
            theme::normal()
        };
        let marker = if grabbed { "⠿ " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(task.content.clone(), style),
        ];
        if task.description.is_some() {
            spans.push(Span::styled(" ≡", theme::dimmed()));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    // Show where the grabbed task would land in this column.
    if let Mode::Grabbed { target, .. } = &app.mode
        && target.status == status
    {
        let at = target.index.min(items.len());
        items.insert(
            at,
            ListItem::new(Line::from(Span::styled(
                "▸ drop here",
                theme::drop_target(),
            ))),
        );
    }

    let title = format!(" {} ({}) ", status.title(), tasks.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            theme::panel_title(theme::column_color(status)),
        ))
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::highlighted()
        } else {
            theme::dimmed()
        });

    frame.render_widget(List::new(items).block(block), area);
}
