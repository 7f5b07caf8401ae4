//! Current-step invariant: the pointer always names a recorded snapshot.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: history is non-empty and `0 <= current_step < len`.
pub struct StepInBoundsInvariant;

impl Invariant<HistoryStore> for StepInBoundsInvariant {
    fn holds(history: &HistoryStore) -> bool {
        !history.is_empty() && history.current_step() < history.len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}
