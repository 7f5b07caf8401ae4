//! Terminal front-end for timeline tic-tac-toe.
//!
//! Renders a [`GameSession`](timeline_tictactoe::GameSession) with ratatui
//! and turns key presses into [`Intent`](timeline_tictactoe::Intent)s. No
//! game rules live here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
