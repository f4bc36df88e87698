//! Boards, cutting dies, and the die-application primitive.

mod die;
pub use die::{CuttingDie, DieKind, GridParseError, MAX_SIZE, parse_rows};

mod catalog;
pub use catalog::{DieSet, FIRST_GENERAL_ID};

mod board;
pub use board::{Board, OutOfBounds};

mod op;
pub use op::{Answer, CuttingInfo, OpLog};
