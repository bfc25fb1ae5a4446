//! Terminal-state classification.

use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::{WinningLine, winning_line};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line yet and at least one empty square; holds the mark to move.
    InProgress(Mark),
    /// A mark completed a line.
    Won(WinningLine),
    /// Full board, no line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// Mark to move, only while the game is in progress.
    pub fn next_mark(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(mark) => write!(f, "Next player: {}", mark),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.mark),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Classifies a board.
///
/// Wins are checked before fullness. The mark to move is derived from the
/// number of occupied squares, which matches cursor parity on any board
/// reached by alternating play.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        return GameStatus::Won(line);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress(Mark::for_cursor(board.occupied()))
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, Square};
    use super::*;

    fn play(indices: &[usize]) -> Board {
        indices.iter().enumerate().fold(Board::new(), |b, (turn, &i)| {
            b.with(Position::ALL[i], Square::Occupied(Mark::for_cursor(turn)))
        })
    }

    #[test]
    fn test_empty_board_x_to_move() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress(Mark::X));
    }

    #[test]
    fn test_o_to_move_after_one_mark() {
        let s = status(&play(&[4]));
        assert_eq!(s, GameStatus::InProgress(Mark::O));
        assert_eq!(s.next_mark(), Some(Mark::O));
        assert!(!s.is_terminal());
    }

    #[test]
    fn test_won_status_carries_line() {
        // X: 0, 4, 8  O: 1, 2
        let s = status(&play(&[0, 1, 4, 2, 8]));
        assert_eq!(s.winner(), Some(Mark::X));
        assert_eq!(s.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
        assert!(s.is_terminal());
        assert_eq!(s.next_mark(), None);
        assert_eq!(s.to_string(), "Winner: X");
    }

    #[test]
    fn test_draw_status() {
        // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
        let s = status(&play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]));
        assert_eq!(s, GameStatus::Draw);
        assert_eq!(s.to_string(), "It's a draw!");
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        // Final X move completes the top row on the ninth square.
        let s = status(&play(&[0, 3, 1, 4, 5, 6, 7, 8, 2]));
        assert_eq!(s.winner(), Some(Mark::X));
    }
}
