//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every mutation of
//! the history store. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S: ?Sized, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod single_cell_step;
pub mod starts_empty;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use single_cell_step::SingleCellStepInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleCellStepInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);
