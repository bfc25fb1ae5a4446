//! Initial-board invariant: the history begins with the empty board.

use super::Invariant;
use crate::{Board, HistoryStore};

/// Invariant: `history[0]` exists and is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<HistoryStore> for StartsEmptyInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Square};

    #[test]
    fn test_new_store_holds() {
        assert!(StartsEmptyInvariant::holds(&HistoryStore::new()));
    }

    #[test]
    fn test_marked_first_board_violates() {
        let mut store = HistoryStore::new();
        store.history[0] = Board::new().with(Position::Center, Square::Occupied(Mark::X));
        assert!(!StartsEmptyInvariant::holds(&store));
    }
}
