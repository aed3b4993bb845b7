//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::Game;

/// Invariant: snapshot `k + 1` equals snapshot `k` plus one new mark, placed
/// on the position recorded by snapshot `k + 1`.
///
/// Marks are never removed or overwritten within a single history.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(played) = *pair[1].position() else {
                return false;
            };

            before.is_empty(played)
                && !after.is_empty(played)
                && before
                    .squares()
                    .iter()
                    .zip(after.squares())
                    .enumerate()
                    .all(|(index, (b, a))| index == played.to_index() || b == a)
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
