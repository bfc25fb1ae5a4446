//! Adjacency invariant: each step fills exactly one empty square.

use super::Invariant;
use crate::{HistoryStore, Square};

/// Invariant: consecutive boards differ in exactly one cell, and that cell
/// goes from empty to a mark.
///
/// Move locations are recovered by diffing adjacent boards, so this is what
/// keeps the derived move list meaningful.
pub struct SingleCellStepInvariant;

impl Invariant<HistoryStore> for SingleCellStepInvariant {
    fn holds(store: &HistoryStore) -> bool {
        store.boards().windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history step fills exactly one empty square"
    }
}
