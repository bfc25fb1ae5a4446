//! Cursor invariant.

use super::Invariant;
use crate::HistoryStore;

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<HistoryStore> for CursorInBoundsInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.cursor() < store.len()
    }

    fn description() -> &'static str {
        "Cursor points into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_jump() {
        let mut store = HistoryStore::new();
        store.play(0).unwrap();
        store.play(1).unwrap();
        store.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&store));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut store = HistoryStore::new();
        store.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&store));
    }
}
