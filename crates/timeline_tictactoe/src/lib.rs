//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Square`] and [`Position`] model the 3x3 grid.
//! - **Rules**: [`rules`] holds the win and draw evaluators.
//! - **History**: [`History`] is a never-empty list of [`Snapshot`]s.
//! - **Controller**: [`Game`] applies moves, jumps between snapshots and
//!   derives the [`GameStatus`] of the snapshot it points at.
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.play(4).unwrap();
//! game.play(0).unwrap();
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod types;

pub use game::{Game, GameStatus, GameView, MoveError};
pub use history::{History, HistoryError, Snapshot};
pub use move_list::{MoveListEntry, SortOrder, move_list};
pub use position::Position;
pub use rules::{WinningLine, check_winner};
pub use types::{Board, Player, Square};
