//! Alternating mark invariant: X and O take strict turns along the history.

use super::Invariant;
use crate::{HistoryStore, Mark, Square};

/// Invariant: the mark placed to reach `history[k]` is the one whose turn
/// it was at cursor `k - 1` (X from even cursors, O from odd).
pub struct AlternatingMarksInvariant;

impl Invariant<HistoryStore> for AlternatingMarksInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store
            .boards()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                pair[0]
                    .diff(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == Square::Occupied(Mark::for_cursor(step)))
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the history"
    }
}
