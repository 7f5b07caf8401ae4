//! A game session: one engine plus presentation-only ordering.

use super::action::{Applied, Intent};
use super::descriptor::MoveDescriptor;
use super::engine::GameEngine;
use super::error::EngineError;
use super::status::Status;
use super::types::Board;
use tracing::{debug, info, instrument};

/// One game session.
///
/// Controls whether the move list is shown oldest-first. The flag never
/// affects the recorded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    engine: GameEngine,
    ascending: bool,
}

impl GameSession {
    /// Creates a session on an empty board with the move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a session with the given move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        info!(ascending, "Creating new game session");
        Self {
            engine: GameEngine::new(),
            ascending,
        }
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Propagates engine contract violations (`InvalidIndex`,
    /// `OutOfRange`). The session is unchanged when an error is returned.
    #[instrument(skip(self), fields(step = self.engine.current_step()))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Applied, EngineError> {
        let applied = match intent {
            Intent::SelectCell(cell) => Applied::Move(self.engine.apply_move(cell)?),
            Intent::SelectStep(step) => {
                self.engine.jump_to(step)?;
                Applied::Jump(step)
            }
            Intent::ToggleOrder => Applied::Order(self.toggle_order()),
        };
        debug!(?applied, "Intent applied");
        Ok(applied)
    }

    /// Flips the move-list order and returns the new `ascending` value.
    pub fn toggle_order(&mut self) -> bool {
        self.ascending = !self.ascending;
        self.ascending
    }

    /// Whether the move list is shown oldest-first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Move-list entries in the session's order.
    pub fn descriptors(&self) -> Vec<MoveDescriptor> {
        self.engine.move_descriptors(self.ascending)
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.engine.current_board()
    }

    /// Winner and next player at the current step.
    pub fn current_status(&self) -> Status {
        self.engine.current_status()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveOutcome, Player, Position};

    #[test]
    fn test_new_session_is_ascending() {
        let session = GameSession::new();
        assert!(session.is_ascending());
        assert_eq!(session.descriptors().len(), 1);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut session = GameSession::new();
        assert_eq!(
            session.dispatch(Intent::SelectCell(4)).unwrap(),
            Applied::Move(MoveOutcome::Placed {
                player: Player::X,
                position: Position::Center
            })
        );
        assert_eq!(session.dispatch(Intent::SelectStep(0)).unwrap(), Applied::Jump(0));
        assert_eq!(session.dispatch(Intent::ToggleOrder).unwrap(), Applied::Order(false));
        assert!(!session.is_ascending());
    }

    #[test]
    fn test_failed_dispatch_leaves_session() {
        let mut session = GameSession::new();
        session.dispatch(Intent::SelectCell(0)).unwrap();
        let before = session.clone();
        assert!(session.dispatch(Intent::SelectStep(2)).is_err());
        assert!(session.dispatch(Intent::SelectCell(42)).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_toggle_does_not_touch_history() {
        let mut session = GameSession::new();
        session.dispatch(Intent::SelectCell(0)).unwrap();
        let history = session.engine().history().clone();
        session.toggle_order();
        assert_eq!(session.engine().history(), &history);
        assert_eq!(session.descriptors()[0].step(), &1);
    }
}
