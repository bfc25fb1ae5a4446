//! Read-only projections of the store for rendering.

use super::position::Location;
use super::rules::GameStatus;
use super::{Board, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Flips between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Cell filled by this move; `None` for the game start.
    pub location: Option<Location>,
    /// True for the board under the cursor.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text shown for the entry.
    pub fn description(&self) -> String {
        if self.is_current {
            return format!("You are at move #{}", self.index);
        }
        match (self.index, self.location) {
            (0, _) => "Go to game start".to_string(),
            (n, Some(location)) => format!("Go to move #{} at {}", n, location),
            (n, None) => format!("Go to move #{}", n),
        }
    }
}

/// Everything a renderer needs, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board under the cursor.
    pub board: Board,
    /// Classification of that board.
    pub status: GameStatus,
    /// Mark to move, absent once the viewed board is terminal.
    pub next_mark: Option<Mark>,
    /// Cursor position.
    pub cursor: usize,
    /// Number of boards in the history.
    pub history_len: usize,
    /// Move list order.
    pub sort_order: SortOrder,
    /// Move list, already in display order.
    pub moves: Vec<MoveEntry>,
}
