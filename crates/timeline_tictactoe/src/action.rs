//! First-class intents and their outcomes.
//!
//! Gestures from the presentation layer arrive as [`Intent`] values and are
//! reduced by [`GameSession::dispatch`](crate::GameSession::dispatch).

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// A board square (0-8) was selected.
    #[display("select cell {_0}")]
    SelectCell(usize),
    /// A move-list entry was selected.
    #[display("select step {_0}")]
    SelectStep(usize),
    /// The sort-order toggle was pressed.
    #[display("toggle order")]
    ToggleOrder,
}

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The viewed board already has a winner.
    #[display("Game is already decided")]
    GameDecided,
    /// The square is taken.
    #[display("Square {_0} is already occupied")]
    CellOccupied(Position),
}

/// Result of a move request that did not violate the engine contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and recorded.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// What a dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Applied {
    /// A move request was handled.
    Move(MoveOutcome),
    /// The current step moved to this index.
    Jump(usize),
    /// Move-list order is now ascending (`true`) or descending.
    Order(bool),
}
