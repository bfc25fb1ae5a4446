//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When a board holds more
/// than one complete line the earliest one here is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the mark that owns it and its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Mark occupying all three cells.
    pub mark: Mark,
    /// Cells of the line, in ascending index order.
    pub cells: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Cell indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }
}

/// Finds the first complete line on the board.
///
/// Returns `None` if no line is held by a single mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine {
                mark,
                cells: [a, b, c],
            })
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, mark)| board.with(*pos, Square::Occupied(*mark)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(winning_line(&board).unwrap().indices(), [2, 4, 6]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // X holds column 0 and the main diagonal; the column comes first.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(winning_line(&board).unwrap().indices(), [0, 3, 6]);

        // Row 2 and column 2 share the corner; the row comes first.
        let board = board_with(&[
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::O),
            (Position::BottomRight, Mark::O),
            (Position::TopRight, Mark::O),
            (Position::MiddleRight, Mark::O),
        ]);
        assert_eq!(winning_line(&board).unwrap().indices(), [6, 7, 8]);
    }

    #[test]
    fn test_contains() {
        let line = WinningLine {
            mark: Mark::X,
            cells: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
