//! Stateless UI rendering for the game, its status and the move list.

use ratatui::{
    Frame,
    layout::{self, Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{GameStatus, Player, Position, Square, WinningLine};

use std::rc::Rc;

use super::app::{App, Focus};
use super::input::Click;

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Timeline Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let (board_pane, moves_pane) = body_panes(chunks[1]);
    draw_board(frame, board_pane, app);
    draw_moves(frame, moves_pane, app);

    let status = app.game().status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(
        "1-9/Enter: Play | Tab: Board/Moves | [ ]: Back/Forward | S: Sort | R: Restart | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(pane_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = grid_rows(inner);

    let winning = app.game().winning_line();
    let cursor = focused.then_some(app.cursor());

    for (i, positions) in ROWS.iter().enumerate() {
        draw_row(frame, rows[i * 2], app, positions, winning.as_ref(), cursor);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    positions: &[Position; 3],
    winning: Option<&WinningLine>,
    cursor: Option<Position>,
) {
    let cols = grid_cols(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, *pos, winning, cursor);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    winning: Option<&WinningLine>,
    cursor: Option<Position>,
) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in its 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let sort_order = app.game().sort_order();

    let items: Vec<ListItem> = app
        .move_list()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves {} ({})", sort_order.arrow(), sort_order))
                .border_style(pane_style(focused)),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Resolves a terminal cell to the board square or move-list row drawn there.
///
/// `area` is the full frame area passed to [`draw`].
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Click> {
    let point = layout::Position::new(column, row);
    let (board_pane, moves_pane) = body_panes(screen_chunks(area)[1]);

    let board_inner = Block::default().borders(Borders::ALL).inner(board_pane);
    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|pos| cell_area(board_inner, *pos).contains(point))
    {
        return Some(Click::Cell(pos));
    }

    let list_inner = Block::default().borders(Borders::ALL).inner(moves_pane);
    list_inner
        .contains(point)
        .then(|| Click::Move(usize::from(row - list_inner.y)))
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area)
}

fn body_panes(body: Rect) -> (Rect, Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);
    (panes[0], panes[1])
}

/// Three cell rows with separator rows between them, centered in `inner`.
fn grid_rows(inner: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(center_rect(inner, 40, 11))
}

fn grid_cols(row: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row)
}

fn cell_area(board_inner: Rect, pos: Position) -> Rect {
    grid_cols(grid_rows(board_inner)[pos.row() * 2])[pos.col() * 2]
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
