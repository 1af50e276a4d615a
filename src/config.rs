//! Command-line and environment configuration for the replay tool.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::doc::Board;
use crate::error::SeedError;
use crate::seed;

#[derive(Parser, Debug)]
#[command(name = "taskboard", about = "Replay drag-and-drop gestures against a task board")]
pub struct Cli {
    /// Initial board JSON; the built-in starter board when absent.
    #[arg(long, global = true, env = "TASKBOARD_BOARD")]
    pub board: Option<PathBuf>,

    /// Print each event's outcome to stderr.
    #[arg(long, global = true, env = "TASKBOARD_TRACE")]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replay a JSON array of drag events and print the resulting board.
    Replay { script: PathBuf },
    /// Print the initial board.
    Seed,
}

/// Typed configuration resolved from [`Cli`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub board_path: Option<PathBuf>,
    pub trace: bool,
    pub command: Command,
}

impl From<Cli> for ReplayConfig {
    fn from(cli: Cli) -> Self {
        Self { board_path: cli.board, trace: cli.trace, command: cli.command }
    }
}

impl ReplayConfig {
    /// Load the configured initial board.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the board file cannot be read or is invalid.
    pub fn initial_board(&self) -> Result<Board, SeedError> {
        match &self.board_path {
            Some(path) => seed::load_board(path),
            None => Ok(seed::default_board()),
        }
    }
}
