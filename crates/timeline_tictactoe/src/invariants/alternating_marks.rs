//! Turn parity invariant: players alternate, X first.

use super::Invariant;
use crate::{HistoryStore, Player, Square};

/// Invariant: the mark placed by move `k` (1-based) belongs to X iff `k` is
/// odd.
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryStore> for AlternatingMarksInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history.iter().enumerate().skip(1).all(|(k, snapshot)| {
            snapshot.last_move().is_some_and(|mv| {
                snapshot.board().get(mv) == Square::Occupied(Player::for_step(k - 1))
            })
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}
