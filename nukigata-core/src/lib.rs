//! Geometry vocabulary shared by all `nukigata` crates.

mod cell;
pub use cell::Cell;

mod direction;
pub use direction::Direction;

mod corner;
pub use corner::{Corner, Corners};

pub mod math;
