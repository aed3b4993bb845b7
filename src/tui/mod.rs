//! Terminal UI for Timeline Games.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::Click;
pub use ui::{draw, hit_test};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, error, info, instrument};

use crate::config::TuiConfig;

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Timeline Games TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.sort_order());
    let res = run_app(&mut terminal, app, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one key or left click, apply it, repeat.
fn run_app<B>(terminal: &mut Terminal<B>, mut app: App, config: &TuiConfig) -> Result<()>
where
    B: ratatui::backend::Backend,
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(config.poll_interval())? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    info!(steps = app.game().history().len(), "Leaving game loop");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                match hit_test(area, mouse.column, mouse.row) {
                    Some(click) => app.handle_click(click),
                    None => debug!(column = mouse.column, row = mouse.row, "Click outside targets"),
                }
            }
            _ => {}
        }
    }
}
