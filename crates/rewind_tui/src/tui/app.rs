//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use rewind_core::{HistoryStore, Position, StoreEvent};
use tracing::{debug, instrument};

use super::input::move_cursor;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Key presses become store calls; the store's events update the status
/// message. Rejected moves change nothing on screen.
#[derive(Debug)]
pub struct App {
    store: HistoryStore,
    board_cursor: Position,
    message: String,
}

impl App {
    /// Wraps a store. Subscribe to the store before handing it over.
    pub fn new(store: HistoryStore) -> Self {
        Self {
            store,
            board_cursor: Position::Center,
            message: "X to move. Arrows + Enter or 1-9 to play.".to_string(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Cell highlighted by the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Latest status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.board_cursor = move_cursor(self.board_cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.board_cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.board_cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                self.jump(self.store.cursor().saturating_sub(1));
            }
            KeyCode::Char(']') | KeyCode::PageDown => self.jump(self.store.cursor() + 1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.store.len() - 1),
            KeyCode::Char('s') => self.store.toggle_sort(),
            KeyCode::Char('r') => self.store.reset(),
            _ => {}
        }
        Flow::Continue
    }

    /// Updates the status message from a store event.
    pub fn on_store_event(&mut self, event: &StoreEvent) {
        debug!(?event, "Handling store event");
        self.message = match event {
            StoreEvent::Played {
                move_number,
                position,
                mark,
                truncated,
                ..
            } => {
                let mut msg = format!("Move #{}: {} played {}", move_number, mark, position);
                if *truncated > 0 {
                    msg.push_str(&format!(" ({} later moves discarded)", truncated));
                }
                msg
            }
            StoreEvent::Jumped { to, .. } if *to == 0 => "Viewing game start".to_string(),
            StoreEvent::Jumped { to, .. } => format!("Viewing move #{}", to),
            StoreEvent::SortToggled(order) => format!("Sort: {}", order.label()),
            StoreEvent::Reset => "New game. X to move.".to_string(),
        };
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.store.play_position(pos) {
            debug!(error = %e, ?pos, "Ignoring illegal move");
        }
    }

    fn jump(&mut self, index: usize) {
        if index == self.store.cursor() {
            return;
        }
        if let Err(e) = self.store.jump_to(index) {
            debug!(error = %e, "Ignoring jump");
        }
    }
}
