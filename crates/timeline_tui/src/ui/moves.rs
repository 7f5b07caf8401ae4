//! Move-list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move list in the session's order, current step in bold.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .session()
        .descriptors()
        .iter()
        .map(|d| {
            let style = if *d.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{:>2}. {}", d.step() + 1, d.label())).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default(),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Moves "),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
