//! Umbrella crate for the die-cutting puzzle solver, plus the offline
//! application layer: problem/answer JSON, report files, random debug boards.

pub use nukigata_board::*;
pub use nukigata_core::*;
pub use nukigata_solver::*;

pub mod problem;
pub use problem::Problem;

pub mod random;

pub mod report;
