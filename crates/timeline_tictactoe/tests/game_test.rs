//! Tests for the game controller: moves, time travel and sorting.

use timeline_tictactoe::{Game, GameStatus, MoveError, Player, Position, SortOrder, Square};

fn play_all(game: &mut Game, indices: &[usize]) {
    for &index in indices {
        game.play(index).expect("legal move");
    }
}

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step(), 0);
    assert_eq!(game.sort_order(), SortOrder::Ascending);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(game.status().to_string(), "Next player: X");
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_marks_alternate_by_step() {
    let mut game = Game::new();
    game.play(0).expect("X");
    game.play(4).expect("O");
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_play_on_occupied_cell_changes_nothing() {
    let mut game = Game::new();
    game.play(0).expect("X");
    let before = game.clone();

    assert_eq!(game.play(0), Err(MoveError::SquareOccupied(Position::TopLeft)));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_play_changes_nothing() {
    let mut game = Game::new();
    let before = game.clone();
    assert_eq!(game.play(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_jump_changes_nothing() {
    let mut game = Game::new();
    game.play(0).expect("X");
    let before = game.clone();
    assert_eq!(game.jump_to(2), Err(MoveError::NoSuchStep(2)));
    assert_eq!(game, before);
}

#[test]
fn test_jump_then_play_truncates_future() {
    let mut game = Game::new();
    game.play(0).expect("X");
    game.play(4).expect("O");
    game.jump_to(0).expect("start");

    // Jumping alone keeps every snapshot.
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.to_move(), Player::X);

    game.play(4).expect("X");
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert!(game.board().is_empty(Position::TopLeft));
}

#[test]
fn test_left_column_win() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    let line = game.winning_line().expect("winning line");
    assert_eq!(
        *line.positions(),
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
}

#[test]
fn test_no_play_after_win() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);
    let before = game.clone();
    assert_eq!(game.play(8), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.play(0), Err(MoveError::GameOver));
}

#[test]
fn test_jump_allowed_from_finished_game_and_play_resumes() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);
    game.jump_to(4).expect("step 4");
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    game.play(8).expect("X can play again");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
}

#[test]
fn test_toggle_sort_only_changes_display_order() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump_to(1).expect("step 1");
    let history_before = game.history().clone();

    game.toggle_sort();

    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.history(), &history_before);
    assert_eq!(game.step(), 1);
    let steps: Vec<_> = game.move_list().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);

    game.toggle_sort();
    let steps: Vec<_> = game.move_list().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![0, 1, 2, 3]);
}

#[test]
fn test_move_list_marks_current_step() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 2]);
    game.jump_to(1).expect("step 1");
    let list = game.move_list();
    let current: Vec<_> = list.iter().filter(|e| *e.is_current()).map(|e| *e.step()).collect();
    assert_eq!(current, vec![1]);
    assert_eq!(list[2].label(), "Go to move #2 (3, 1)");
}

#[test]
fn test_restart_keeps_sort_order() {
    let mut game = Game::with_sort_order(SortOrder::Descending);
    play_all(&mut game, &[0, 1]);
    game.restart();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step(), 0);
    assert_eq!(game.sort_order(), SortOrder::Descending);
}

#[test]
fn test_move_error_is_std_error() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    let err: Box<dyn std::error::Error> = Box::new(game.play(4).expect_err("occupied"));
    assert_eq!(err.to_string(), "Square Center is already occupied");
    assert!(err.source().is_none());

    let err: Box<dyn std::error::Error> = Box::new(MoveError::NoSuchStep(3));
    assert_eq!(err.to_string(), "No move #3 in history");
    assert!(err.source().is_none());
}
