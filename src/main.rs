//! Timeline Games - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use timeline_games::{
    Cli, Command, TuiConfig, init_file_logging, init_stderr_logging, render_json, render_text,
    replay, run_tui,
};
use timeline_tictactoe::SortOrder;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref())?;
            init_file_logging(config.log_file(), config.log_filter())?;
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging("warn");
            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            info!(?moves, ?jump, %order, "Replaying moves");

            let game = replay(&moves, jump, order);
            if json {
                println!("{}", render_json(&game).context("Failed to serialize game")?);
            } else {
                print!("{}", render_text(&game));
            }
            Ok(())
        }
    }
}
