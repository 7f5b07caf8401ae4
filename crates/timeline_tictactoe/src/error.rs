//! Contract violation errors.
//!
//! Only caller mistakes are errors. Moves on occupied squares or after the
//! game is decided are reported as [`crate::MoveOutcome::Ignored`] instead.

use derive_more::{Display, Error};
use tracing::instrument;

/// What the caller got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside the board.
    #[display("Invalid cell index {index} (must be 0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },

    /// History step outside the recorded history.
    #[display("Step {step} out of range (history has {len} snapshots)")]
    OutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Cell index outside the board.
    #[track_caller]
    pub fn invalid_index(index: usize) -> Self {
        Self::new(EngineErrorKind::InvalidIndex { index })
    }

    /// History step outside the recorded history.
    #[track_caller]
    pub fn out_of_range(step: usize, len: usize) -> Self {
        Self::new(EngineErrorKind::OutOfRange { step, len })
    }
}
