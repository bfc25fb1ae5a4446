//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::move_cursor;
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_core::{ChannelObserver, HistoryStore, StoreEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Settings;

/// Puts the terminal back into cooked mode on drop.
///
/// Created right after raw mode is enabled, so every early return during
/// setup still leaves the alternate screen.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting rewind TUI");

    let (tx, rx) = mpsc::channel();
    let mut store = HistoryStore::with_sort_order(*settings.sort_order());
    store.subscribe(ChannelObserver::new(tx));
    let mut app = App::new(store);

    let res = {
        let _guard = TerminalGuard::enter()?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| run_loop(&mut terminal, &mut app, &rx))
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.store().len() - 1, "TUI closed");
    res
}

/// Redraws after every key press or store event.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &Receiver<StoreEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }

        for store_event in events.try_iter() {
            app.on_store_event(&store_event);
        }
    }
}
