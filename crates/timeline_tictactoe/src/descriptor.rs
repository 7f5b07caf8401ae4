//! Read-only move-list entries.

use derive_getters::Getters;
use serde::Serialize;

/// One entry of the move list, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveDescriptor {
    /// True history index, independent of display order.
    step: usize,
    /// "Go to game start" or "Go to move #n (col, row)".
    label: String,
    /// Row of the move, `None` for the game start.
    row: Option<usize>,
    /// Column of the move, `None` for the game start.
    col: Option<usize>,
    /// Whether this is the step currently viewed.
    is_current: bool,
}

impl MoveDescriptor {
    pub(crate) fn new(step: usize, cell: Option<(usize, usize)>, is_current: bool) -> Self {
        let label = match cell {
            Some((row, col)) => format!("Go to move #{step} ({col}, {row})"),
            None => "Go to game start".to_string(),
        };
        Self {
            step,
            label,
            row: cell.map(|(row, _)| row),
            col: cell.map(|(_, col)| col),
            is_current,
        }
    }
}
