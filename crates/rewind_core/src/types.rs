//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Mark that moves from a history cursor with the given index.
    ///
    /// X always plays from even cursors, since the history starts empty
    /// and X makes move 1.
    pub fn for_cursor(cursor: usize) -> Self {
        if cursor % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Immutable 3x3 board snapshot.
///
/// Boards are never edited in place. [`Board::with`] returns a new value,
/// which is what lets the history keep every earlier snapshot intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `square`.
    #[must_use]
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Positions whose squares differ between `self` and `other`, in index order.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the output doubles as a
    /// keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with(Position::Center, Square::Occupied(Mark::X));

        assert!(empty.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_diff_lists_changed_cells_in_order() {
        let a = Board::new().with(Position::TopRight, Square::Occupied(Mark::X));
        let b = a
            .with(Position::TopLeft, Square::Occupied(Mark::O))
            .with(Position::BottomRight, Square::Occupied(Mark::X));

        assert_eq!(a.diff(&b), vec![Position::TopLeft, Position::BottomRight]);
        assert!(a.diff(&a).is_empty());
    }

    #[test]
    fn test_mark_for_cursor() {
        assert_eq!(Mark::for_cursor(0), Mark::X);
        assert_eq!(Mark::for_cursor(1), Mark::O);
        assert_eq!(Mark::for_cursor(6), Mark::X);
    }

    #[test]
    fn test_display_shows_keys_for_empty_squares() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Mark::X))
            .with(Position::Center, Square::Occupied(Mark::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
