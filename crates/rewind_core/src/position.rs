//! Typed cell coordinates for the 3x3 board.

use super::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// 1-indexed row and column of a cell, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Location {
    /// Row, 1 to 3 from the top.
    pub row: usize,
    /// Column, 1 to 3 from the left.
    pub col: usize,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Like [`Position::from_index`], but reports the bad index as a move error.
    #[instrument]
    pub fn try_from_index(index: usize) -> Result<Self, MoveError> {
        Self::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }

    /// Creates position from 0-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// 1-indexed row/column pair.
    pub fn location(self) -> Location {
        let index = self.to_index();
        Location {
            row: index / 3 + 1,
            col: index % 3 + 1,
        }
    }

    /// Parse from label or number (0-8).
    ///
    /// Numbers must be plain ASCII digits; labels match case-insensitively.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse::<usize>().ok().and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_row_major_layout() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_row_col(index / 3, index % 3), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_location_is_one_indexed() {
        assert_eq!(Position::TopLeft.location(), Location { row: 1, col: 1 });
        assert_eq!(Position::MiddleRight.location(), Location { row: 2, col: 3 });
        assert_eq!(Position::BottomRight.location().to_string(), "(3, 3)");
    }

    #[test]
    fn test_try_from_index_rejects_out_of_bounds() {
        assert_eq!(Position::try_from_index(4), Ok(Position::Center));
        assert_eq!(Position::try_from_index(12), Err(MoveError::OutOfBounds(12)));
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" top-right "), Some(Position::TopRight));
        assert_eq!(Position::from_label_or_number("BOTTOM-LEFT"), Some(Position::BottomLeft));
        assert_eq!(Position::from_label_or_number("nowhere"), None);
        assert_eq!(Position::from_label_or_number("9"), None);
        assert_eq!(Position::from_label_or_number("+4"), None);
        assert_eq!(Position::from_label_or_number(""), None);
    }
}
