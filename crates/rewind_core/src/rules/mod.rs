//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Nothing here holds state; the history store calls into these rules for
//! move legality and terminal-state classification.

pub mod draw;
pub mod placement;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use placement::apply_move;
pub use status::{GameStatus, status};
pub use win::{LINES, WinningLine, check_winner, winning_line};
