//! Game controller: turn alternation, time travel and derived status.

use super::history::{History, Snapshot};
use super::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, InvariantSet, MonotonicBoardInvariant,
};
use super::move_list::{MoveListEntry, SortOrder, move_list};
use super::rules::{WinningLine, check_winner, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the board at the current step. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player who moves next.
        next: Player,
    },
    /// A player holds a winning line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Full board, no winner.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Why an operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board at the current step already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// History index past the last snapshot.
    #[display("No move #{} in history", _0)]
    NoSuchStep(#[error(not(source))] usize),
}

/// Tic-tac-toe game with a time-travel history.
///
/// `step` points at the snapshot being shown; the player to move is
/// derived from its parity. Rejected operations return an error and
/// leave the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    step: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game at the empty start snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            sort_order,
        }
    }

    /// Plays cell `index` (0-8) for the player whose turn it is.
    ///
    /// Any snapshots after the current step are discarded first. Returns the
    /// position played.
    ///
    /// # Errors
    ///
    /// `OutOfBounds`, `GameOver` or `SquareOccupied`; the game is unchanged.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.status().is_over() {
            debug!(?pos, "Rejected move: game over");
            return Err(MoveError::GameOver);
        }

        let mut board = *self.board();
        if !board.is_empty(pos) {
            debug!(?pos, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        board.set(pos, Square::Occupied(player));
        self.step = self.history.branch_from(self.step, Snapshot::new(board, Some(pos)));

        debug_assert!(
            <(
                AlternatingTurnInvariant,
                HistoryConsistentInvariant,
                MonotonicBoardInvariant,
            ) as InvariantSet<Game>>::check_all(self)
            .is_ok()
        );

        info!(%player, %pos, step = self.step, status = %self.status(), "Move played");
        Ok(pos)
    }

    /// Points the game at history index `step`. History is unchanged.
    ///
    /// # Errors
    ///
    /// `NoSuchStep` if `step` is past the last snapshot.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            debug!("Rejected jump: no such step");
            return Err(MoveError::NoSuchStep(step));
        }
        self.step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Toggled sort order");
    }

    /// Discards all history and returns to the start. Keeps the sort order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history = History::new();
        self.step = 0;
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        // `step` only ever holds an index returned by or checked against the history.
        &self.history.snapshots()[self.step]
    }

    /// Full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current history index.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winning line on the board at the current step.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(self.board())
    }

    /// Status of the board at the current step.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(line) = check_winner(board) {
            GameStatus::Won(*line.player())
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Move list in the current sort order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        move_list(&self.history, self.step, self.sort_order)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable read-only view of a game, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Human-readable status line.
    status: String,
    /// Positions of the winning line, if any.
    winning_positions: Vec<Position>,
    /// Current history index.
    step: usize,
    /// Move-list display order.
    sort_order: SortOrder,
    /// Move list in display order.
    moves: Vec<MoveListEntry>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            board: *game.board(),
            status: game.status().to_string(),
            winning_positions: game
                .winning_line()
                .map(|line| line.positions().to_vec())
                .unwrap_or_default(),
            step: game.step(),
            sort_order: game.sort_order(),
            moves: game.move_list(),
        }
    }
}
