//! Front-end state: cursor, focus and the game session.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use timeline_tictactoe::{Applied, GameSession, Intent, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    Moves,
}

/// Application state for the terminal front-end.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the list cursor (display order).
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app around a session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                return;
            }
            _ => {}
        }

        if let Some(intent) = self.intent_for(key) {
            self.dispatch(intent);
            return;
        }

        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, key),
            Focus::Moves => {
                let last = self.session.engine().history().len() - 1;
                match key {
                    KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                    KeyCode::Down => self.selected = (self.selected + 1).min(last),
                    _ => {}
                }
            }
        }
    }

    /// Intent a key press stands for, if any.
    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        if let Some(cell) = digit_cell(key) {
            return Some(Intent::SelectCell(cell));
        }
        match (key, self.focus) {
            (KeyCode::Char('s'), _) => Some(Intent::ToggleOrder),
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                Some(Intent::SelectCell(self.cursor.to_index()))
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => self
                .session
                .descriptors()
                .get(self.selected)
                .map(|d| Intent::SelectStep(*d.step())),
            _ => None,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        match self.session.dispatch(intent) {
            Ok(Applied::Move(MoveOutcome::Ignored(reason))) => {
                self.message = Some(reason.to_string());
            }
            Ok(applied) => {
                debug!(?applied, "Applied");
                self.message = None;
            }
            Err(e) => {
                warn!(error = %e, %intent, "Intent rejected");
                self.message = Some(e.kind.to_string());
            }
        }
        self.select_current();
    }

    /// Points the list cursor at the current step in display order.
    fn select_current(&mut self) {
        let current = self.session.engine().current_step();
        if let Some(row) = self
            .session
            .descriptors()
            .iter()
            .position(|d| *d.step() == current)
        {
            self.selected = row;
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list row under the list cursor.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback for the last ignored or rejected action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::{Player, Square};

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.session().current_board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_occupied_square_shows_message() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Square Center is already occupied"));
        assert_eq!(app.session().engine().history().len(), 2);
    }

    #[test]
    fn test_jump_from_move_list() {
        let mut app = App::new(GameSession::new());
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.session().engine().current_step(), 1);
        assert_eq!(app.session().engine().history().len(), 4);
        assert_eq!(app.session().current_status().next_player(), &Player::O);
    }

    #[test]
    fn test_toggle_keeps_current_selected() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.selected(), 2);

        app.handle_key(KeyCode::Char('s'));
        assert!(!app.session().is_ascending());
        assert_eq!(app.selected(), 0);
        assert_eq!(app.session().descriptors()[0].step(), &2);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(GameSession::new());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
