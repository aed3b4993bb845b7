//! Application state and key and mouse handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use timeline_tictactoe::{Game, MoveListEntry, Position, SortOrder};
use tracing::{debug, info, instrument};

use super::input::{Click, digit_to_index, move_cursor, step_selection};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Owns the [`Game`] and the purely visual state around it: the board
/// cursor, the focused pane and the move-list selection. The selection is
/// an index into the *displayed* list, so it is re-aimed at the current
/// step whenever the order or the history changes.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        let mut app = Self {
            game: Game::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
        };
        app.select_current();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.game.move_list()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, step = self.game.step()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.restart();
                self.select_current();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.game.toggle_sort();
                self.select_current();
            }
            KeyCode::Char('[') => self.jump(self.game.step().wrapping_sub(1)),
            KeyCode::Char(']') => self.jump(self.game.step() + 1),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Switched focus");
            }
            code => {
                if let Some(index) = digit_to_index(code) {
                    self.play(index);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        AppAction::Continue
    }

    /// Handles a left click on a board cell or a move-list row.
    ///
    /// Focus follows the click. A row past the end of the list is ignored.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn handle_click(&mut self, click: Click) {
        match click {
            Click::Cell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.play(pos.to_index());
            }
            Click::Move(row) => {
                self.focus = Focus::Moves;
                if let Some(entry) = self.game.move_list().get(row) {
                    self.selected = row;
                    self.jump(*entry.step());
                }
            }
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let list = self.game.move_list();
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = list.get(self.selected) {
                    self.jump(*entry.step());
                }
            }
            code => self.selected = step_selection(self.selected, list.len(), code),
        }
    }

    /// Plays `index`; an ignored move leaves everything as it was.
    fn play(&mut self, index: usize) {
        match self.game.play(index) {
            Ok(pos) => {
                self.cursor = pos;
                self.select_current();
            }
            Err(e) => debug!(index, error = %e, "Move ignored"),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.select_current(),
            Err(e) => debug!(step, error = %e, "Jump ignored"),
        }
    }

    /// Points the list selection at the entry for the current step.
    fn select_current(&mut self) {
        self.selected = self
            .game
            .move_list()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use timeline_tictactoe::{GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game().step(), 2);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.game().status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::default();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert!(!app.game().board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_move_list_enter_jumps_to_selected_step() {
        let mut app = App::default();
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current_step() {
        let mut app = App::default();
        for c in ['1', '5'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.game().step(), 2);
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.game().step(), 0);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.game().step(), 0);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.game().step(), 1);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.game().step(), 1);
    }

    #[test]
    fn test_click_on_cell_plays_and_focuses_board() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        app.handle_click(Click::Cell(Position::BottomLeft));
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.cursor(), Position::BottomLeft);
        assert_eq!(app.game().step(), 1);

        // Occupied cell: no change.
        app.handle_click(Click::Cell(Position::BottomLeft));
        assert_eq!(app.game().step(), 1);
    }

    #[test]
    fn test_click_on_move_row_jumps() {
        let mut app = App::new(SortOrder::Descending);
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        // Descending: row 3 is the game start.
        app.handle_click(Click::Move(3));
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.game().step(), 0);
        assert_eq!(app.selected(), 3);
        assert_eq!(app.game().history().len(), 4);

        app.handle_click(Click::Move(9));
        assert_eq!(app.game().step(), 0);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_quit_and_release_events() {
        let mut app = App::default();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(release), AppAction::Continue);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
    }
}
