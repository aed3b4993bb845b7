//! History consistency invariant: snapshot `k` holds exactly `k` marks.

use super::Invariant;
use crate::Game;

/// Invariant: the snapshot at step `k` has `k` occupied squares, and every
/// snapshot after the start records an occupied position.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let step_in_range = game.step() < history.len();

        step_in_range
            && history
                .snapshots()
                .iter()
                .enumerate()
                .all(|(step, snapshot)| {
                    let board = snapshot.board();
                    let position_ok = match snapshot.position() {
                        None => step == 0,
                        Some(pos) => step > 0 && !board.is_empty(*pos),
                    };
                    position_ok && board.occupied_count() == step
                })
    }

    fn description() -> &'static str {
        "Snapshot k holds k marks and records the square played"
    }
}
