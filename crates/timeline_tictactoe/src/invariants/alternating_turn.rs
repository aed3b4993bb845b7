//! Alternating turn invariant: X, O, X, O, ... by step parity.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: every snapshot holds marks in turn order.
///
/// After `k` moves X has `ceil(k / 2)` marks and O has `floor(k / 2)`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .snapshots()
            .iter()
            .enumerate()
            .all(|(step, snapshot)| {
                let board = snapshot.board();
                board.count(Player::X) == step.div_ceil(2) && board.count(Player::O) == step / 2
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_across_time_travel() {
        let mut game = Game::new();
        game.play(0).expect("X");
        game.play(4).expect("O");
        game.play(8).expect("X");
        game.jump_to(1).expect("step 1");
        game.play(2).expect("O");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.history().len(), 3);
    }
}
