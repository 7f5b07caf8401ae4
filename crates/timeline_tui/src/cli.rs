//! Command-line interface for timeline_tui.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Timeline tic-tac-toe - play, rewind and branch in the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "timeline_tui")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the move list sorted newest-first
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };
        if self.descending {
            config = config.with_ascending(false);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        Ok(config)
    }
}
