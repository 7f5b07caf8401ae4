//! Derived game status.

use super::Player;
use derive_getters::Getters;
use serde::Serialize;

/// Phase of the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Moves can be made.
    InProgress,
    /// A player owns a line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

/// Status of the current step, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct Status {
    /// Owner of a completed line, if any.
    winner: Option<Player>,
    /// Player to move by turn parity. Meaningless once `winner` is set.
    next_player: Player,
    /// Board is full with no winner.
    draw: bool,
}

impl Status {
    pub(crate) fn new(winner: Option<Player>, next_player: Player, draw: bool) -> Self {
        Self {
            winner,
            next_player,
            draw,
        }
    }

    /// Collapses the status into a phase.
    pub fn phase(&self) -> Phase {
        match (self.winner, self.draw) {
            (Some(player), _) => Phase::Won(player),
            (None, true) => Phase::Draw,
            (None, false) => Phase::InProgress,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.phase() {
            Phase::Won(player) => write!(f, "Winner: {}", player),
            Phase::Draw => write!(f, "Draw"),
            Phase::InProgress => write!(f, "Next player: {}", self.next_player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(Status::new(None, Player::O, false).to_string(), "Next player: O");
        assert_eq!(Status::new(Some(Player::X), Player::O, false).to_string(), "Winner: X");
        assert_eq!(Status::new(None, Player::O, true).to_string(), "Draw");
    }
}
