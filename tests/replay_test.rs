//! Tests for headless replay and its text/JSON rendering.

use timeline_games::{render_json, render_text, replay};
use timeline_tictactoe::{GameStatus, Player, SortOrder};

#[test]
fn test_replay_win_text() {
    let game = replay(&[0, 1, 3, 4, 6], None, SortOrder::Ascending);
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    let text = render_text(&game);
    assert!(text.starts_with("X|O|3\n-+-+-\nX|O|6\n-+-+-\nX|8|9\n"));
    assert!(text.contains("Winner: X\n"));
    assert!(text.contains("Winning line: 0, 3, 6\n"));
    assert!(text.contains("Moves (ascending):\n  Go to game start\n"));
    assert!(text.ends_with("> You are at move #5\n"));
}

#[test]
fn test_replay_ignores_rejected_moves() {
    // 0 twice, then an out-of-range cell.
    let game = replay(&[0, 0, 42, 4], None, SortOrder::Ascending);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
}

#[test]
fn test_replay_jump_and_descending_order() {
    let game = replay(&[0, 4, 8], Some(1), SortOrder::Descending);
    assert_eq!(game.step(), 1);
    assert_eq!(game.history().len(), 4);

    let text = render_text(&game);
    assert!(text.contains("Next player: O"));
    let moves: Vec<_> = text.lines().skip_while(|l| !l.starts_with("Moves")).skip(1).collect();
    assert_eq!(
        moves,
        vec![
            "  Go to move #3 (3, 3)",
            "  Go to move #2 (2, 2)",
            "> You are at move #1",
            "  Go to game start",
        ]
    );
}

#[test]
fn test_replay_invalid_jump_is_ignored() {
    let game = replay(&[0], Some(7), SortOrder::Ascending);
    assert_eq!(game.step(), 1);
}

#[test]
fn test_render_json() {
    let game = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], None, SortOrder::Ascending);
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&game).expect("json")).expect("parse");
    assert_eq!(json["status"], "Draw");
    assert_eq!(json["step"], 9);
    assert_eq!(json["winning_positions"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(10));
}
