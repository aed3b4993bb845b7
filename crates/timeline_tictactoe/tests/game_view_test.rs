//! Tests for the serializable game view.

use timeline_tictactoe::{Game, GameView, Position};

#[test]
fn test_view_reports_winning_positions() {
    let mut game = Game::new();
    for index in [2, 0, 4, 1, 6] {
        game.play(index).expect("legal move");
    }
    let view = GameView::from(&game);
    assert_eq!(view.status(), "Winner: X");
    assert_eq!(
        view.winning_positions(),
        &vec![Position::TopRight, Position::Center, Position::BottomLeft]
    );
    assert_eq!(*view.step(), 5);
}

#[test]
fn test_view_serializes_to_json() {
    let mut game = Game::new();
    game.play(4).expect("X");
    game.toggle_sort();
    let json = serde_json::to_value(GameView::from(&game)).expect("serialize");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["sort_order"], "descending");
    assert_eq!(json["moves"][0]["step"], 1);
    assert_eq!(json["moves"][0]["is_current"], true);
    assert_eq!(json["moves"][1]["location"], "");
}
