//! Headless replay: apply a move sequence and render the result as text.

use timeline_tictactoe::{Game, GameView, SortOrder};
use tracing::{debug, instrument};

/// Plays `moves` in order on a fresh game, then jumps to `jump` if given.
///
/// Rejected moves and jumps are ignored, matching interactive play.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, sort_order: SortOrder) -> Game {
    let mut game = Game::with_sort_order(sort_order);

    for &index in moves {
        if let Err(e) = game.play(index) {
            debug!(index, error = %e, "Ignoring move");
        }
    }

    if let Some(step) = jump
        && let Err(e) = game.jump_to(step)
    {
        debug!(step, error = %e, "Ignoring jump");
    }

    game
}

/// Renders board, status and move list as plain text.
///
/// The current move-list entry is prefixed with `>`.
#[instrument(skip(game))]
pub fn render_text(game: &Game) -> String {
    let mut out = String::new();
    out.push_str(&game.board().display());
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push('\n');

    if let Some(line) = game.winning_line() {
        let cells: Vec<_> = line.positions().iter().map(|p| p.to_index().to_string()).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }

    out.push_str(&format!("\nMoves ({}):\n", game.sort_order()));
    for entry in game.move_list() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

/// Renders the game as pretty-printed JSON.
#[instrument(skip(game))]
pub fn render_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GameView::from(game))
}
