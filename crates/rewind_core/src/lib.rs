//! Rewind core - tic-tac-toe rules and a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure functions on a [`Board`] snapshot ([`rules::apply_move`],
//!   [`rules::winning_line`], [`rules::is_draw`], [`rules::status`])
//! - **History**: [`HistoryStore`] owns every board played so far and the
//!   cursor into them
//! - **Invariants**: checkable properties of the history, enforced in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_core::{HistoryStore, Mark};
//!
//! let mut store = HistoryStore::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     store.play(cell).unwrap();
//! }
//! assert_eq!(store.status().winner(), Some(Mark::X));
//!
//! // Go back two moves and take a different line.
//! store.jump_to(3).unwrap();
//! store.play(2).unwrap();
//! assert_eq!(store.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod observer;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use error::{JumpError, MoveError};
pub use history::HistoryStore;
pub use observer::{ChannelObserver, StoreEvent, StoreObserver};
pub use position::{Location, Position};
pub use rules::{GameStatus, WinningLine};
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveEntry, SortOrder};
