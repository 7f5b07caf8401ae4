//! Rendering for the terminal front-end.

mod board;
mod moves;

pub use board::render_board;
pub use moves::render_moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use timeline_tictactoe::Phase;

/// Draws the whole screen.
pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(14), Constraint::Length(1)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(outer[0]);

    render_board(f, panes[0], app);
    render_info(f, panes[1], app);
    render_help(f, outer[1]);
}

fn render_info(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    render_status(f, rows[0], app);
    render_sort_toggle(f, rows[1], app);
    render_moves(f, rows[2], app);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.session().current_status();
    let color = match status.phase() {
        Phase::Won(_) => Color::Green,
        Phase::Draw => Color::Yellow,
        Phase::InProgress => Color::White,
    };
    let mut lines = vec![Line::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = app.message() {
        lines.push(Line::styled(message.to_string(), Style::default().fg(Color::Red)));
    }
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

/// Label of the sort toggle: names the order it switches to.
pub fn sort_label(ascending: bool) -> &'static str {
    if ascending {
        "[s] Sort descending"
    } else {
        "[s] Sort ascending"
    }
}

fn render_sort_toggle(f: &mut Frame, area: Rect, app: &App) {
    let toggle = Paragraph::new(sort_label(app.session().is_ascending()))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(toggle, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows: move  enter: select  1-9: place  tab: switch pane  s: sort  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use timeline_tictactoe::GameSession;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_sort_label_names_next_order() {
        assert_eq!(sort_label(true), "[s] Sort descending");
        assert_eq!(sort_label(false), "[s] Sort ascending");
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Char('1'));
        let text = screen(&app);
        assert!(text.contains("Next player: O"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #1 (0, 0)"));
        assert!(text.contains("Sort descending"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(GameSession::new());
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(screen(&app).contains("Winner: X"));
    }
}
