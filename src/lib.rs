//! Timeline Games - terminal tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Game logic**: [`timeline_tictactoe`] owns the board, rules, history
//!   and controller. This crate only presents it.
//! - **TUI**: [`run_tui`] drives a ratatui/crossterm event loop over an [`App`].
//! - **Replay**: [`replay()`] applies a move sequence headlessly and
//!   [`render_text`] / [`render_json`] print the result.
//! - **Config**: [`Cli`] for arguments, [`TuiConfig`] for the TOML file.
//!
//! # Example
//!
//! ```
//! use timeline_games::{render_text, replay};
//! use timeline_tictactoe::SortOrder;
//!
//! let game = replay(&[0, 1, 3, 4, 6], None, SortOrder::Ascending);
//! assert!(render_text(&game).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Headless replay
pub use replay::{render_json, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Click, Focus, draw, hit_test, run_tui};
