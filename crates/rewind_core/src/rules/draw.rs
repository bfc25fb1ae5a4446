//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no complete line.
///
/// Wins are checked first, so a full board that also holds a line is a
/// win and never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}
