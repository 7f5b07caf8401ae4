//! Timeline tic-tac-toe - a game engine with full move history.
//!
//! Every move is recorded as an immutable [`Snapshot`]. Players can jump
//! back to any earlier snapshot and resume play from there, which discards
//! the previously recorded future (branching).
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] (win and draw detection)
//! - **History**: [`HistoryStore`], the snapshot log and current-step pointer
//! - **Engine**: [`GameEngine`], move validation and turn parity
//! - **Session**: [`GameSession`], intent dispatch and move-list ordering
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameSession, Intent, Player};
//!
//! # fn example() -> Result<(), timeline_tictactoe::EngineError> {
//! let mut session = GameSession::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     session.dispatch(Intent::SelectCell(cell))?;
//! }
//! assert_eq!(session.current_status().winner(), &Some(Player::X));
//!
//! // Rewind and play a different line.
//! session.dispatch(Intent::SelectStep(2))?;
//! session.dispatch(Intent::SelectCell(8))?;
//! assert_eq!(session.engine().history().len(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod descriptor;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use action::{Applied, IgnoreReason, Intent, MoveOutcome};
pub use descriptor::MoveDescriptor;
pub use engine::GameEngine;
pub use error::{EngineError, EngineErrorKind};
pub use history::{HistoryStore, Snapshot};
pub use position::Position;
pub use session::GameSession;
pub use status::{Phase, Status};
pub use types::{BOARD_CELLS, BOARD_SIZE, Board, Player, Square};
