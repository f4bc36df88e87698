//! The swap family: everything here reduces a two-cell exchange to standard
//! `Full`-die operations on the work board.

use nukigata_core::math::decompose_to_powers_of_two;
use nukigata_core::{Cell, Corner, Direction};

use crate::{SolveError, Solver};

impl Solver {
    /// Swaps a corner cell with another cell on the same row or column,
    /// leaving the rest of the board untouched.
    ///
    /// Costs at most `max(4, popcount(margin) + 1)` operations: one die per
    /// binary power of the gap plus the closing unit die, or the fixed
    /// four-operation sequence once the staircase would be longer.
    pub fn swap_edge_axis_aligned(&mut self, corner: Cell, target: Cell) -> Result<(), SolveError> {
        if corner.x == target.x && corner.y != target.y {
            self.swap_edge_vertical(corner, target)
        } else if corner.y == target.y && corner.x != target.x {
            self.swap_edge_horizontal(corner, target)
        } else {
            Err(SolveError::NonSwappableTargets(corner, target))
        }
    }

    /// Row variant: `corner` and `target` share a row.
    pub(crate) fn swap_edge_horizontal(
        &mut self,
        corner_cell: Cell,
        target: Cell,
    ) -> Result<(), SolveError> {
        let corner = self
            .board
            .corners()
            .kind_of(corner_cell)
            .ok_or(SolveError::NotACorner(corner_cell))?;
        debug_assert_eq!(corner_cell.y, target.y);
        debug_assert_ne!(corner_cell.x, target.x);

        let margin = (corner_cell.x - target.x).abs() - 1;
        let powers = decompose_to_powers_of_two(margin as u32);
        if powers.len() >= 4 {
            return self.swap_edge_fixed_horizontal(corner, target);
        }

        let direction = if corner.is_west() {
            Direction::Right
        } else {
            Direction::Left
        };
        for size in powers {
            let size = size as i32;
            let dx = if corner.is_west() { -size } else { 1 };
            let dy = if corner.is_north() { 1 - size } else { 0 };
            self.apply_full(size, target.offset(dx, dy), direction)?;
        }
        // The unit die at the target itself completes the swap.
        self.apply_full(1, target, direction)
    }

    /// Column variant: `corner` and `target` share a column.
    pub(crate) fn swap_edge_vertical(
        &mut self,
        corner_cell: Cell,
        target: Cell,
    ) -> Result<(), SolveError> {
        let corner = self
            .board
            .corners()
            .kind_of(corner_cell)
            .ok_or(SolveError::NotACorner(corner_cell))?;
        debug_assert_eq!(corner_cell.x, target.x);
        debug_assert_ne!(corner_cell.y, target.y);

        let margin = (corner_cell.y - target.y).abs() - 1;
        let powers = decompose_to_powers_of_two(margin as u32);
        if powers.len() >= 4 {
            return self.swap_edge_fixed_vertical(corner, target);
        }

        let direction = if corner.is_north() {
            Direction::Down
        } else {
            Direction::Up
        };
        for size in powers {
            let size = size as i32;
            let dx = if corner.is_west() { 1 - size } else { 0 };
            let dy = if corner.is_north() { -size } else { 1 };
            self.apply_full(size, target.offset(dx, dy), direction)?;
        }
        self.apply_full(1, target, direction)
    }

    /// Fixed-cost corner swap: a blanket shift lands the target on the
    /// corner, a unit punch returns the displaced corner cell, the shift is
    /// undone through its restoration cell, and a final unit punch seats the
    /// target. Always exactly four operations.
    fn swap_edge_fixed_horizontal(
        &mut self,
        corner: Corner,
        target: Cell,
    ) -> Result<(), SolveError> {
        let shift = if corner.is_west() {
            Direction::Left
        } else {
            Direction::Right
        };
        let restore = self.line_move_to_corner_horizontal(corner, target)?;
        self.apply_full(1, restore, shift)?;
        self.line_move_to_corner_horizontal(corner, restore)?;
        self.apply_full(1, target, shift.opposite())
    }

    fn swap_edge_fixed_vertical(&mut self, corner: Corner, target: Cell) -> Result<(), SolveError> {
        let shift = if corner.is_north() {
            Direction::Up
        } else {
            Direction::Down
        };
        let restore = self.line_move_to_corner_vertical(corner, target)?;
        self.apply_full(1, restore, shift)?;
        self.line_move_to_corner_vertical(corner, restore)?;
        self.apply_full(1, target, shift.opposite())
    }

    /// Rotates every row so that `target`'s column lands on the west or east
    /// edge of `corner`, in one blanket-die operation.
    ///
    /// Returns the restoration cell: feeding it back through the same move
    /// (with the same corner) performs the inverse rotation. A target already
    /// on the corner's column moves nothing and restores to itself.
    pub fn line_move_to_corner_horizontal(
        &mut self,
        corner: Corner,
        target: Cell,
    ) -> Result<Cell, SolveError> {
        let width = self.board.width();
        let restore_x = if corner.is_west() {
            self.move_column_to_edge(target.x, Direction::Left)?;
            (width - target.x) % width
        } else {
            self.move_column_to_edge(target.x, Direction::Right)?;
            if target.x == width - 1 {
                width - 1
            } else {
                width - 2 - target.x
            }
        };
        Ok(Cell::new(restore_x, target.y))
    }

    /// Column analogue of [`Solver::line_move_to_corner_horizontal`].
    pub fn line_move_to_corner_vertical(
        &mut self,
        corner: Corner,
        target: Cell,
    ) -> Result<Cell, SolveError> {
        let height = self.board.height();
        let restore_y = if corner.is_north() {
            self.move_row_to_edge(target.y, Direction::Up)?;
            (height - target.y) % height
        } else {
            self.move_row_to_edge(target.y, Direction::Down)?;
            if target.y == height - 1 {
                height - 1
            } else {
                height - 2 - target.y
            }
        };
        Ok(Cell::new(target.x, restore_y))
    }

    /// Swaps two cells lying inside a corner block: either both on one edge
    /// line, or an L-shaped pair touching a vertical and a horizontal edge.
    pub fn swap_edges(&mut self, t1: Cell, t2: Cell) -> Result<(), SolveError> {
        let corners = *self.board.corners();

        if t1.x == t2.x {
            return if t1.y == corners.n() || t1.y == corners.s() {
                self.swap_edge_vertical(t1, t2)
            } else if t2.y == corners.n() || t2.y == corners.s() {
                self.swap_edge_vertical(t2, t1)
            } else {
                Err(SolveError::NonSwappableTargets(t1, t2))
            };
        }
        if t1.y == t2.y {
            return if t1.x == corners.w() || t1.x == corners.e() {
                self.swap_edge_horizontal(t1, t2)
            } else if t2.x == corners.w() || t2.x == corners.e() {
                self.swap_edge_horizontal(t2, t1)
            } else {
                Err(SolveError::NonSwappableTargets(t1, t2))
            };
        }

        // L-shaped pair. The working corner joins the column of the cell on a
        // vertical edge with the row of the cell on a horizontal edge; the
        // outer vertical swaps cancel their own collateral movement, and the
        // middle horizontal swap carries the exchange across.
        let on_vertical_edge = |cell: Cell| cell.x == corners.w() || cell.x == corners.e();
        let on_horizontal_edge = |cell: Cell| cell.y == corners.n() || cell.y == corners.s();

        let (side, band) = if on_vertical_edge(t1) && on_horizontal_edge(t2) {
            (t1, t2)
        } else if on_vertical_edge(t2) && on_horizontal_edge(t1) {
            (t2, t1)
        } else {
            return Err(SolveError::NonSwappableTargets(t1, t2));
        };

        let corner = Cell::new(side.x, band.y);
        self.swap_edge_vertical(corner, side)?;
        self.swap_edge_horizontal(corner, band)?;
        self.swap_edge_vertical(corner, side)
    }

    /// Swaps any two distinct cells of the work board, leaving every other
    /// cell in place.
    ///
    /// The pair's bounding box is slid into a working corner with two blanket
    /// shifts, exchanged there with [`Solver::swap_edges`], and the shifts are
    /// reversed exactly.
    pub fn swap(&mut self, t1: Cell, t2: Cell) -> Result<(), SolveError> {
        debug_assert!(self.board.contains(t1) && self.board.contains(t2));
        debug_assert_ne!(t1, t2);

        let width = self.board.width();
        let height = self.board.height();

        if (t1.x - t2.x).signum() != (t1.y - t2.y).signum() {
            // The pair leans with the main diagonal; work from the nearer of
            // the north-west and south-east corners.
            if (t1.y + t2.y) * height + (t1.x + t2.x) * width < 2 * height * height {
                let block = Cell::new(t1.x.min(t2.x), t1.y.min(t2.y));
                self.move_row_to_edge(block.y, Direction::Up)?;
                self.move_column_to_edge(block.x, Direction::Left)?;
                self.swap_edges(t1.offset(-block.x, -block.y), t2.offset(-block.x, -block.y))?;
                self.move_column_to_edge(width - 1 - block.x, Direction::Right)?;
                self.move_row_to_edge(height - 1 - block.y, Direction::Down)?;
            } else {
                let block = Cell::new(t1.x.max(t2.x), t1.y.max(t2.y));
                let (dx, dy) = (width - 1 - block.x, height - 1 - block.y);
                self.move_row_to_edge(block.y, Direction::Down)?;
                self.move_column_to_edge(block.x, Direction::Right)?;
                self.swap_edges(t1.offset(dx, dy), t2.offset(dx, dy))?;
                self.move_column_to_edge(width - 1 - block.x, Direction::Left)?;
                self.move_row_to_edge(height - 1 - block.y, Direction::Up)?;
            }
        } else {
            // Against the diagonal; north-east or south-west.
            if (t1.y + t2.y) * height >= (t1.x + t2.x) * width {
                let block = Cell::new(t1.x.max(t2.x), t1.y.min(t2.y));
                let dx = width - 1 - block.x;
                self.move_row_to_edge(block.y, Direction::Up)?;
                self.move_column_to_edge(block.x, Direction::Right)?;
                self.swap_edges(t1.offset(dx, -block.y), t2.offset(dx, -block.y))?;
                self.move_column_to_edge(width - 1 - block.x, Direction::Left)?;
                self.move_row_to_edge(height - 1 - block.y, Direction::Down)?;
            } else {
                let block = Cell::new(t1.x.min(t2.x), t1.y.max(t2.y));
                let dy = height - 1 - block.y;
                self.move_row_to_edge(block.y, Direction::Down)?;
                self.move_column_to_edge(block.x, Direction::Left)?;
                self.swap_edges(t1.offset(-block.x, dy), t2.offset(-block.x, dy))?;
                self.move_column_to_edge(width - 1 - block.x, Direction::Right)?;
                self.move_row_to_edge(height - 1 - block.y, Direction::Up)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay;
    use nukigata_board::{Board, DieSet};

    /// A board whose cells are all distinct, so any misplaced cell is caught.
    fn distinct_board(width: i32, height: i32) -> Board {
        Board::new(width, height, (0..width * height).map(|i| i as u8).collect())
    }

    fn solver_on(board: &Board, dies: &DieSet) -> Solver {
        Solver::new(board.clone(), board.clone(), dies.clone())
    }

    #[track_caller]
    fn assert_exact_swap(base: &Board, after: &Board, a: Cell, b: Cell) {
        for (cell, value) in after.cells() {
            let expected = if cell == a {
                base.get(b)
            } else if cell == b {
                base.get(a)
            } else {
                base.get(cell)
            };
            assert_eq!(value, expected, "swapping {a} and {b} broke {cell}");
        }
    }

    fn exhaustive_swap_sweep(width: i32, height: i32) {
        let base = distinct_board(width, height);
        let dies = DieSet::standard();
        for a in base.cells().map(|(cell, _)| cell) {
            for b in base.cells().map(|(cell, _)| cell) {
                if a == b {
                    continue;
                }
                let mut solver = solver_on(&base, &dies);
                solver.swap(a, b).unwrap();
                assert_exact_swap(&base, solver.board(), a, b);
            }
        }
    }

    #[test]
    fn swap_any_pair_on_a_5x4_board() {
        exhaustive_swap_sweep(5, 4);
    }

    #[test]
    fn swap_any_pair_on_a_square_board() {
        exhaustive_swap_sweep(6, 6);
    }

    #[test]
    fn swap_any_pair_on_single_line_boards() {
        exhaustive_swap_sweep(8, 1);
        exhaustive_swap_sweep(1, 8);
        exhaustive_swap_sweep(2, 2);
    }

    // Wide and tall sweeps reach margins whose decomposition needs four
    // powers, so the fixed four-operation sequence runs too.
    #[test]
    fn swap_any_pair_on_a_wide_board() {
        exhaustive_swap_sweep(18, 2);
    }

    #[test]
    fn swap_any_pair_on_a_tall_board() {
        exhaustive_swap_sweep(2, 18);
    }

    #[test]
    fn edge_swap_stays_within_its_operation_bound() {
        let base = distinct_board(20, 3);
        let dies = DieSet::standard();

        for corner_x in [0, 19] {
            let corner = Cell::new(corner_x, 0);
            for t in 1..20 {
                let target = Cell::new(if corner_x == 0 { t } else { 19 - t }, corner.y);
                let mut solver = solver_on(&base, &dies);
                solver.swap_edge_axis_aligned(corner, target).unwrap();

                let margin = (t - 1) as u32;
                let bound = 4usize.max(margin.count_ones() as usize + 1);
                assert!(
                    solver.log().len() <= bound,
                    "corner {corner} target {target}: {} ops > bound {bound}",
                    solver.log().len(),
                );
                assert_exact_swap(&base, solver.board(), corner, target);
            }
        }
    }

    #[test]
    fn vertical_edge_swap_hits_the_fixed_sequence() {
        let base = distinct_board(2, 20);
        let dies = DieSet::standard();

        // Margin 15 = 8 + 4 + 2 + 1 is the smallest four-power gap.
        for corner in [Cell::new(0, 0), Cell::new(0, 19), Cell::new(1, 0)] {
            let target = Cell::new(corner.x, if corner.y == 0 { 16 } else { 3 });
            let mut solver = solver_on(&base, &dies);
            solver.swap_edge_axis_aligned(corner, target).unwrap();
            assert_eq!(solver.log().len(), 4);
            assert_exact_swap(&base, solver.board(), corner, target);

            let replayed = replay(&base, solver.dies(), solver.log().ops()).unwrap();
            assert_eq!(&replayed, solver.board());
        }
    }

    #[test]
    fn line_move_lands_the_target_and_restores() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();

        let mut solver = solver_on(&base, &dies);
        let target = Cell::new(4, 0);
        let restore = solver
            .line_move_to_corner_horizontal(Corner::Nw, target)
            .unwrap();
        assert_eq!(solver.board().get(Cell::new(0, 0)), base.get(target));

        let back = solver
            .line_move_to_corner_horizontal(Corner::Nw, restore)
            .unwrap();
        assert_eq!(solver.board(), &base);
        assert_eq!(back, target);

        let mut solver = solver_on(&base, &dies);
        let target = Cell::new(0, 2);
        let restore = solver
            .line_move_to_corner_vertical(Corner::Se, target)
            .unwrap();
        assert_eq!(solver.board().get(Cell::new(0, 3)), base.get(target));

        let back = solver
            .line_move_to_corner_vertical(Corner::Se, restore)
            .unwrap();
        assert_eq!(solver.board(), &base);
        assert_eq!(back, target);
    }

    #[test]
    fn line_move_of_a_cell_already_on_the_corner_is_identity() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();
        let mut solver = solver_on(&base, &dies);

        let restore = solver
            .line_move_to_corner_horizontal(Corner::Nw, Cell::new(0, 0))
            .unwrap();
        assert_eq!(restore, Cell::new(0, 0));
        assert_eq!(solver.board(), &base);
        assert!(solver.log().is_empty());

        let restore = solver
            .line_move_to_corner_vertical(Corner::Sw, Cell::new(0, 3))
            .unwrap();
        assert_eq!(restore, Cell::new(0, 3));
        assert_eq!(solver.board(), &base);
        assert!(solver.log().is_empty());
    }

    #[test]
    fn swap_edges_handles_l_shaped_pairs() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();

        for (a, b) in [
            (Cell::new(0, 2), Cell::new(3, 0)),
            (Cell::new(5, 2), Cell::new(2, 0)),
            (Cell::new(0, 1), Cell::new(4, 3)),
            (Cell::new(5, 1), Cell::new(1, 3)),
            (Cell::new(0, 0), Cell::new(5, 3)),
            (Cell::new(0, 3), Cell::new(5, 0)),
        ] {
            let mut solver = solver_on(&base, &dies);
            solver.swap_edges(a, b).unwrap();
            assert_exact_swap(&base, solver.board(), a, b);
        }
    }

    #[test]
    fn swap_edges_rejects_interior_pairs() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();
        let mut solver = solver_on(&base, &dies);

        let (a, b) = (Cell::new(2, 1), Cell::new(3, 2));
        assert_eq!(
            solver.swap_edges(a, b).unwrap_err(),
            SolveError::NonSwappableTargets(a, b),
        );

        // Same column, but neither cell on a horizontal edge.
        let (a, b) = (Cell::new(2, 1), Cell::new(2, 2));
        assert_eq!(
            solver.swap_edges(a, b).unwrap_err(),
            SolveError::NonSwappableTargets(a, b),
        );
    }

    #[test]
    fn edge_swap_requires_a_real_corner() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();
        let mut solver = solver_on(&base, &dies);

        let not_corner = Cell::new(1, 0);
        assert_eq!(
            solver
                .swap_edge_axis_aligned(not_corner, Cell::new(4, 0))
                .unwrap_err(),
            SolveError::NotACorner(not_corner),
        );
    }

    #[test]
    fn diagonal_corner_pairs_swap() {
        let base = distinct_board(6, 4);
        let dies = DieSet::standard();
        let corners = *base.corners();

        for (a, b) in [
            (corners.nw, corners.se),
            (corners.ne, corners.sw),
            (corners.nw, corners.ne),
            (corners.sw, corners.se),
            (corners.nw, corners.sw),
        ] {
            let mut solver = solver_on(&base, &dies);
            solver.swap(a, b).unwrap();
            assert_exact_swap(&base, solver.board(), a, b);
        }
    }
}
