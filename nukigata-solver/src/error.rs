use nukigata_board::{DieKind, OutOfBounds};
use nukigata_core::{Cell, Direction};

/// Precondition violations inside the solver.
///
/// Every variant is a programmer error: fatal to the session, reported with
/// the offending coordinates, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    /// A row shift was asked to move horizontally, or a column shift
    /// vertically.
    #[error("unsupported direction {0:?} for this shift")]
    UnsupportedDirection(Direction),

    /// A corner-parameterized primitive received a cell that is not a corner
    /// of the board.
    #[error("{0} is not a corner cell")]
    NotACorner(Cell),

    /// The two cells share neither a row nor a column and do not form a valid
    /// corner-block L.
    #[error("cells {0} and {1} cannot be swapped inside a corner block")]
    NonSwappableTargets(Cell, Cell),

    /// No standard die has this size and kind.
    #[error("no standard die of size {size} and kind {kind:?}")]
    UnknownStandardDie { size: i32, kind: DieKind },

    /// An operation log referenced a die id outside the session's die set.
    #[error("no die with id {0}")]
    UnknownDieId(u32),
}
