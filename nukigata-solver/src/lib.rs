//! The solving session: reduces an arbitrary board rearrangement into a log
//! of standard-die operations.
//!
//! Layered from the bottom up: the die-application primitive lives in
//! [`nukigata_board`]; this crate builds the two-cell swap family on top of
//! it, then the coarse row/column aligner and the per-cell fine aligner, and
//! finally the driver that runs both to completion.

mod error;
pub use error::SolveError;

mod solver;
pub use solver::{Solver, replay};

mod swap;

mod arrange;
