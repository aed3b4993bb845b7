//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeline Games - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./timeline_games.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a sequence of cells headlessly and print the result
    Replay {
        /// Cell indices (0-8) to play in order, comma separated
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// History step to jump to after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves most recent first
        #[arg(long)]
        descending: bool,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
