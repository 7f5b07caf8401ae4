//! Delta invariant: each snapshot adds exactly one mark to the previous one.

use super::Invariant;
use crate::{HistoryStore, Position, Snapshot, Square};

/// Invariant: snapshot 0 is the empty board with no move, and every later
/// snapshot differs from its predecessor only at `last_move`, where an empty
/// square became occupied.
pub struct SingleCellDeltaInvariant;

fn is_single_delta(prev: &Snapshot, next: &Snapshot) -> bool {
    let Some(mv) = next.last_move() else {
        return false;
    };
    Position::ALL.iter().all(|&pos| {
        let (before, after) = (prev.board().get(pos), next.board().get(pos));
        if pos == mv {
            before == Square::Empty && after != Square::Empty
        } else {
            before == after
        }
    })
}

impl Invariant<HistoryStore> for SingleCellDeltaInvariant {
    fn holds(history: &HistoryStore) -> bool {
        if history.iter().next() != Some(&Snapshot::initial()) {
            return false;
        }

        history
            .iter()
            .zip(history.iter().skip(1))
            .all(|(prev, next)| is_single_delta(prev, next))
    }

    fn description() -> &'static str {
        "Each snapshot changes exactly the square of its move"
    }
}
