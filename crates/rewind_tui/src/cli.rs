//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a full move history you can jump through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Show the move list latest-first, overriding the settings file
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a script of moves and print the resulting game
    ///
    /// Tokens: `4` or `p4` plays cell 4 (0-8), `j2` jumps to move #2,
    /// `s` toggles the move list order, `r` starts over.
    Replay {
        /// Script tokens, e.g. `0 4 1 j2 5`
        #[arg(required = true, num_args = 1..)]
        script: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Subcommand to run, with `play` as the default.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
