//! Snapshot history with a movable current step.

use super::error::EngineError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One recorded board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, `None` for the initial one.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Ordered log of snapshots.
///
/// Always holds at least the initial snapshot, and the current step always
/// points at a recorded snapshot. Only [`GameEngine`](crate::GameEngine)
/// records new snapshots; other crates can read the history and move the
/// step of a history they own, but not append to it:
///
/// ```compile_fail
/// use timeline_tictactoe::{Board, HistoryStore, Position};
///
/// let mut history = HistoryStore::new();
/// history.append(Board::new(), Position::Center);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
    current_step: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current_step: 0,
        }
    }

    /// Records `board` as the result of playing `mv` from the current step.
    ///
    /// Snapshots after the current step are discarded first, so playing from
    /// a rewound step replaces the old future.
    #[instrument(skip(self, board), fields(position = ?mv, from_step = self.current_step))]
    pub(crate) fn append(&mut self, board: Board, mv: Position) {
        let discarded = self.snapshots.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping recorded future");
        }
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(Snapshot {
            board,
            last_move: Some(mv),
        });
        self.current_step = self.snapshots.len() - 1;

        if let Err(violations) = HistoryInvariants::check_all(self) {
            for v in &violations {
                warn!(invariant = %v.description, "History invariant violated");
            }
            debug_assert!(false, "History invariants violated: {:?}", violations);
        }
    }

    /// Moves the current step without touching the recorded snapshots.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `step` is not a recorded index.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.snapshots.len() {
            return Err(EngineError::out_of_range(step, self.snapshots.len()));
        }
        self.current_step = step;
        Ok(())
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current_step]
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Snapshot at `step`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `step` is not a recorded index.
    #[track_caller]
    pub fn at(&self, step: usize) -> Result<&Snapshot, EngineError> {
        self.snapshots
            .get(step)
            .ok_or_else(|| EngineError::out_of_range(step, self.snapshots.len()))
    }

    /// Number of recorded snapshots (moves made plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if there are no snapshots (never the case for a history
    /// built with `new`).
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates snapshots from the game start.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
impl HistoryStore {
    /// Builds a history without any checks, for corrupting in tests.
    pub(crate) fn from_parts(snapshots: Vec<Snapshot>, current_step: usize) -> Self {
        Self {
            snapshots,
            current_step,
        }
    }
}

#[cfg(test)]
impl Snapshot {
    pub(crate) fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a HistoryStore {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineErrorKind, Player, Square};

    fn play(history: &mut HistoryStore, pos: Position, player: Player) {
        let mut board = *history.current().board();
        board.set(pos, Square::Occupied(player));
        history.append(board, pos);
    }

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = HistoryStore::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_step(), 0);
        assert_eq!(history.current(), &Snapshot::initial());
        assert!(history.current().last_move().is_none());
        assert!(!history.is_empty());
    }

    #[test]
    fn test_append_advances_step() {
        let mut history = HistoryStore::new();
        play(&mut history, Position::Center, Player::X);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_step(), 1);
        assert_eq!(history.current().last_move(), Some(Position::Center));
    }

    #[test]
    fn test_jump_keeps_future() {
        let mut history = HistoryStore::new();
        play(&mut history, Position::Center, Player::X);
        play(&mut history, Position::TopLeft, Player::O);
        history.jump_to(0).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_step(), 0);
        history.jump_to(2).unwrap();
        assert_eq!(history.current().last_move(), Some(Position::TopLeft));
    }

    #[test]
    fn test_append_after_jump_branches() {
        let mut history = HistoryStore::new();
        play(&mut history, Position::Center, Player::X);
        play(&mut history, Position::TopLeft, Player::O);
        play(&mut history, Position::TopRight, Player::X);
        history.jump_to(1).unwrap();
        play(&mut history, Position::BottomLeft, Player::O);

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_step(), 2);
        assert_eq!(history.current().last_move(), Some(Position::BottomLeft));
        assert!(history.current().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = HistoryStore::new();
        let err = history.jump_to(1).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::OutOfRange { step: 1, len: 1 });
        assert_eq!(history.current_step(), 0);
    }

    #[test]
    fn test_at_is_bounds_checked() {
        let mut history = HistoryStore::new();
        play(&mut history, Position::Center, Player::X);
        assert_eq!(history.at(1).unwrap().last_move(), Some(Position::Center));
        assert!(history.at(2).is_err());
    }

    #[test]
    fn test_earlier_snapshots_unchanged_by_later_moves() {
        let mut history = HistoryStore::new();
        play(&mut history, Position::Center, Player::X);
        let first = *history.at(1).unwrap();
        play(&mut history, Position::TopLeft, Player::O);
        assert_eq!(history.at(1).unwrap(), &first);
        assert!(history.at(0).unwrap().board().squares().iter().all(|s| *s == Square::Empty));
    }
}
