//! Error types for moves and time travel.
//!
//! Both errors are recoverable: the store is left exactly as it was, and
//! the caller is expected to ignore the interaction that produced them.

use super::position::Position;

/// A move that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// A history index that cannot be jumped to.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The index is past the end of the history.
    #[display("Move #{} does not exist (history has {} boards)", index, len)]
    OutOfRange {
        /// Requested history index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            JumpError::OutOfRange { index: 7, len: 3 }.to_string(),
            "Move #7 does not exist (history has 3 boards)"
        );
    }
}
