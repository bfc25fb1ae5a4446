//! Applying a single mark to a board.

use super::super::{Board, Mark, MoveError, Position, Square};
use tracing::{debug, instrument};

/// Returns a new board with `mark` placed at `pos`.
///
/// The input board is not touched. Callers are expected to check the
/// square first; the check is repeated here so an occupied square can
/// never be overwritten.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if `pos` already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, pos: Position, mark: Mark) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        debug!(?pos, "Refusing to overwrite occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, Square::Occupied(mark)))
}
