//! Keyboard and mouse mapping for the board cursor and the move list.

use crossterm::event::KeyCode;
use timeline_tictactoe::Position;

/// A left click resolved to the element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// A board cell.
    Cell(Position),
    /// A row of the displayed move list, counted from the top.
    Move(usize),
}

/// Moves the board cursor one square for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to cell indices 0-8.
pub fn digit_to_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Moves a list selection by one row, wrapping around.
pub fn step_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    if len == 0 {
        return 0;
    }
    match key {
        KeyCode::Up => (selected + len - 1) % len,
        KeyCode::Down => (selected + 1) % len,
        KeyCode::Home => 0,
        KeyCode::End => len - 1,
        _ => selected.min(len - 1),
    }
}
