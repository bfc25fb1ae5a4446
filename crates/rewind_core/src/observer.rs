//! Change notification for the history store.
//!
//! The store knows nothing about rendering. After each successful mutation
//! it hands a [`StoreEvent`] to every subscribed [`StoreObserver`], and the
//! front-end decides what to redraw.

use super::rules::GameStatus;
use super::view::SortOrder;
use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::debug;

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A mark was placed and the cursor moved to the new board.
    Played {
        /// History index of the new board.
        move_number: usize,
        /// Cell that was filled.
        position: Position,
        /// Mark that was placed.
        mark: Mark,
        /// Number of future boards discarded by the move.
        truncated: usize,
        /// Classification of the new board.
        status: GameStatus,
    },
    /// The cursor moved without touching the history.
    Jumped {
        /// Previous cursor.
        from: usize,
        /// New cursor.
        to: usize,
    },
    /// The move list order flipped.
    SortToggled(SortOrder),
    /// The history went back to a single empty board.
    Reset,
}

/// Receives store events synchronously, in mutation order.
pub trait StoreObserver {
    /// Called once per successful mutation.
    fn on_event(&mut self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent),
{
    fn on_event(&mut self, event: &StoreEvent) {
        self(event)
    }
}

/// Forwards events into an mpsc channel so a UI loop can poll them.
#[derive(Debug, Clone, derive_new::new)]
pub struct ChannelObserver {
    tx: Sender<StoreEvent>,
}

impl StoreObserver for ChannelObserver {
    fn on_event(&mut self, event: &StoreEvent) {
        if self.tx.send(*event).is_err() {
            debug!("Store event receiver dropped");
        }
    }
}
