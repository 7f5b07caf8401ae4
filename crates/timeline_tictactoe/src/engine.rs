//! Move validation and turn handling over the snapshot history.

use super::action::{IgnoreReason, MoveOutcome};
use super::descriptor::MoveDescriptor;
use super::error::EngineError;
use super::history::HistoryStore;
use super::position::Position;
use super::rules;
use super::status::{Phase, Status};
use super::types::{Board, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine with time travel.
///
/// The engine holds the only [`HistoryStore`] of a game. The player to move
/// and the winner are never stored: both are derived from the current step
/// each time they are asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: HistoryStore,
}

impl GameEngine {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
        }
    }

    /// Plays `cells` in order from a new game.
    ///
    /// Ignored moves (occupied squares, moves after a win) are skipped the
    /// same way [`apply_move`](Self::apply_move) skips them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` for the first index not on the board.
    #[instrument]
    pub fn from_moves(cells: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for &cell in cells {
            engine.apply_move(cell)?;
        }
        Ok(engine)
    }

    /// Places the next player's mark at `cell_index` (0-8).
    ///
    /// When the viewed step is earlier than the last recorded one, the
    /// recorded future is discarded and this move becomes the new last step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if `cell_index` is not on the board. Occupied
    /// squares and decided games are not errors; they come back as
    /// [`MoveOutcome::Ignored`] with the state unchanged.
    #[instrument(skip(self), fields(step = self.history.current_step()))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<MoveOutcome, EngineError> {
        let position =
            Position::from_index(cell_index).ok_or_else(|| EngineError::invalid_index(cell_index))?;

        let mut board = *self.history.current().board();

        if rules::evaluate(&board).is_some() {
            debug!("Move ignored: game already decided");
            return Ok(MoveOutcome::Ignored(IgnoreReason::GameDecided));
        }

        if !board.is_empty(position) {
            debug!(%position, "Move ignored: square occupied");
            return Ok(MoveOutcome::Ignored(IgnoreReason::CellOccupied(position)));
        }

        let player = self.next_player();
        board.set(position, Square::Occupied(player));
        self.history.append(board, position);

        info!(?player, %position, step = self.history.current_step(), "Move recorded");
        debug!(board = %board.display(), "Board after move");
        Ok(MoveOutcome::Placed { player, position })
    }

    /// Views the board as it was after `step` moves.
    ///
    /// Recorded history is kept; only a later move discards it.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `step` is not a recorded index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        self.history.jump_to(step)?;
        debug!(next_player = ?self.next_player(), "Jumped");
        Ok(())
    }

    /// Player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.history.current_step())
    }

    /// Winner and next player at the current step.
    #[instrument(skip(self))]
    pub fn current_status(&self) -> Status {
        let board = self.current_board();
        Status::new(
            rules::evaluate(board),
            self.next_player(),
            rules::is_draw(board),
        )
    }

    /// Phase of the current step.
    pub fn phase(&self) -> Phase {
        self.current_status().phase()
    }

    /// Move-list entries for the whole history.
    ///
    /// `ascending = false` reverses the list; each entry keeps its true
    /// history index.
    #[instrument(skip(self))]
    pub fn move_descriptors(&self, ascending: bool) -> Vec<MoveDescriptor> {
        let current = self.history.current_step();
        let mut descriptors: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                let cell = snapshot.last_move().map(|pos| (pos.row(), pos.col()));
                MoveDescriptor::new(step, cell, step == current)
            })
            .collect();
        if !ascending {
            descriptors.reverse();
        }
        descriptors
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// Read-only view of the recorded history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
