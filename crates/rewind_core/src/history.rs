//! Move history with time travel.
//!
//! [`HistoryStore`] owns every board produced so far, the cursor that picks
//! the board being viewed, and the move list sort order. Boards are never
//! edited; playing a move after jumping back drops the old future and
//! appends the new board, so only one line of play exists at a time.

use super::observer::{StoreEvent, StoreObserver};
use super::position::Location;
use super::rules::{self, GameStatus};
use super::view::{GameView, MoveEntry, SortOrder};
use super::{Board, JumpError, Mark, MoveError, Position};
use tracing::{debug, info, instrument};

/// Ordered board snapshots plus the cursor into them.
pub struct HistoryStore {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
    sort_order: SortOrder,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl HistoryStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates an empty store with the given move list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            sort_order,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for subsequent mutations.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Plays the mark whose turn it is at cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not a cell
    /// - [`MoveError::GameOver`] if the viewed board is won or drawn
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    ///
    /// The store is unchanged and no event is sent on error.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::try_from_index(index)?;
        self.play_position(pos)
    }

    /// Same as [`HistoryStore::play`] with a typed cell.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play_position(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = *self.current_board();
        if rules::status(&current).is_terminal() {
            debug!("Rejecting move on a finished board");
            return Err(MoveError::GameOver);
        }

        let mark = Mark::for_cursor(self.cursor);
        let next = rules::apply_move(&current, pos, mark)?;

        let truncated = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        #[cfg(debug_assertions)]
        self.check_invariants();

        let status = self.status();
        info!(
            move_number = self.cursor,
            ?pos,
            %mark,
            truncated,
            status = %status,
            "Move played"
        );
        if status.is_terminal() {
            info!(status = %status, "Game finished");
        }

        self.notify(StoreEvent::Played {
            move_number: self.cursor,
            position: pos,
            mark,
            truncated,
            status,
        });
        Ok(())
    }

    /// Moves the cursor to history index `index`.
    ///
    /// Any index inside the history is allowed, including finished boards.
    /// The history itself is never altered.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index >= len()`.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if index >= len {
            debug!("Rejecting jump past end of history");
            return Err(JumpError::OutOfRange { index, len });
        }

        let from = self.cursor;
        self.cursor = index;
        debug!(from, to = index, "Cursor moved");
        self.notify(StoreEvent::Jumped { from, to: index });
        Ok(())
    }

    /// Flips the move list order. History and cursor are untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(order = self.sort_order.label(), "Sort order toggled");
        self.notify(StoreEvent::SortToggled(self.sort_order));
    }

    /// Starts over from the empty board. The sort order is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.cursor = 0;
        info!("History reset");
        self.notify(StoreEvent::Reset);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Board under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Board at history index `index`, if it exists.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// All boards, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.history
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of boards in the history (moves played plus one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Raw turn parity at the cursor.
    ///
    /// Only meaningful while [`HistoryStore::status`] is in progress; use
    /// [`HistoryStore::next_mark`] for display.
    pub fn x_is_next(&self) -> bool {
        self.cursor % 2 == 0
    }

    /// Mark to move, or `None` once the viewed board is finished.
    pub fn next_mark(&self) -> Option<Mark> {
        self.status().next_mark()
    }

    /// Classification of the viewed board, recomputed on every call.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board())
    }

    /// Cell and mark placed to reach `history[move_index]`.
    ///
    /// Recovered by diffing the board with its predecessor. Returns `None`
    /// for the game start and for indices past the end.
    pub fn move_at(&self, move_index: usize) -> Option<(Position, Mark)> {
        if move_index == 0 {
            return None;
        }
        let before = self.history.get(move_index - 1)?;
        let after = self.history.get(move_index)?;

        let changed = before.diff(after);
        debug_assert_eq!(
            changed.len(),
            1,
            "boards {} and {} differ in {} cells",
            move_index - 1,
            move_index,
            changed.len()
        );

        let pos = *changed.first()?;
        after.get(pos).mark().map(|mark| (pos, mark))
    }

    /// 1-indexed row and column of the move that produced `history[move_index]`.
    pub fn move_location(&self, move_index: usize) -> Option<Location> {
        self.move_at(move_index).map(|(pos, _)| pos.location())
    }

    /// Move list entries in display order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .map(|index| MoveEntry::new(index, self.move_location(index), index == self.cursor))
            .collect();
        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Snapshot of everything a renderer needs.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView {
            board: *self.current_board(),
            status,
            next_mark: status.next_mark(),
            cursor: self.cursor,
            history_len: self.history.len(),
            sort_order: self.sort_order,
            moves: self.move_list(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{HistoryInvariants, InvariantSet};
        use tracing::error;

        if let Err(violations) = HistoryInvariants::check_all(self) {
            for violation in &violations {
                error!(description = %violation.description, "History invariant violated");
            }
            panic!("History invariants violated: {:?}", violations);
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("history", &self.history)
            .field("cursor", &self.cursor)
            .field("sort_order", &self.sort_order)
            .field("observers", &self.observers.len())
            .finish()
    }
}
