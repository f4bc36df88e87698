//! Coarse row/column alignment and the per-cell fine tail.

use nukigata_board::Board;
use nukigata_core::{Cell, Direction};

use crate::solver::{roll_columns, roll_rows};
use crate::{SolveError, Solver};

impl Solver {
    /// Greedily fixes one edge of the work board to match the same edge of
    /// `target`.
    ///
    /// Each mismatched position first looks for a mutually beneficial partner
    /// (the swap fixes both ends), then settles for any mismatched cell
    /// carrying the wanted value. All searches run in ascending position
    /// order, so identical inputs arrange identically.
    pub(crate) fn arrange_edge(
        &mut self,
        target: &Board,
        edge: Direction,
    ) -> Result<(), SolveError> {
        let length = if edge.is_vertical() {
            self.board.width()
        } else {
            self.board.height()
        };
        let south = self.board.height() - 1;
        let east = self.board.width() - 1;
        let cell_at = move |i: i32| match edge {
            Direction::Up => Cell::new(i, 0),
            Direction::Down => Cell::new(i, south),
            Direction::Left => Cell::new(0, i),
            Direction::Right => Cell::new(east, i),
        };

        for i in 0..length {
            let cell = cell_at(i);
            let want = target.get(cell);
            if self.board.get(cell) == want {
                continue;
            }

            let carries_wanted_value = |board: &Board, j: i32| {
                let other = cell_at(j);
                board.get(other) != target.get(other) && board.get(other) == want
            };
            let partner = (0..length)
                .find(|&j| {
                    carries_wanted_value(&self.board, j)
                        && self.board.get(cell) == target.get(cell_at(j))
                })
                .or_else(|| (0..length).find(|&j| carries_wanted_value(&self.board, j)));

            if let Some(j) = partner {
                self.swap(cell, cell_at(j))?;
            }
        }
        Ok(())
    }

    /// One coarse pass over the rows: pins the top and bottom edges, then
    /// rolls each arrangeable interior row up to the top edge, fixes it
    /// there, and closes by rolling the original row order back.
    ///
    /// Returns whether any interior row was arrangeable.
    pub(crate) fn arrange_rows(&mut self) -> Result<bool, SolveError> {
        let mut target = self.goal.clone();
        self.arrange_edge(&target, Direction::Up)?;
        self.arrange_edge(&target, Direction::Down)?;

        let height = self.board.height();
        let arrangeable: Vec<i32> = (1..height - 1)
            .filter(|&y| is_arrangeable(self.board.row(y), target.row(y)))
            .collect();

        // order[i] is the original index of the row currently at i.
        let mut order: Vec<i32> = (0..height).collect();
        for &row in &arrangeable {
            let y = order.iter().position(|&r| r == row).unwrap() as i32;
            self.move_row_to_edge(y, Direction::Up)?;
            roll_rows(&mut target, self.dies.full_max(), y, Direction::Up)?;
            order.rotate_left(y as usize);
            self.arrange_edge(&target, Direction::Up)?;
        }

        // One closing roll restores the original row order.
        let y = order.iter().position(|&r| r == 0).unwrap() as i32;
        self.move_row_to_edge(y, Direction::Up)?;
        Ok(!arrangeable.is_empty())
    }

    /// Column analogue of [`Solver::arrange_rows`], working against the left
    /// edge.
    pub(crate) fn arrange_columns(&mut self) -> Result<bool, SolveError> {
        let mut target = self.goal.clone();
        self.arrange_edge(&target, Direction::Left)?;
        self.arrange_edge(&target, Direction::Right)?;

        let width = self.board.width();
        let arrangeable: Vec<i32> = (1..width - 1)
            .filter(|&x| {
                let line: Vec<u8> = self.board.column(x).collect();
                let target_line: Vec<u8> = target.column(x).collect();
                is_arrangeable(&line, &target_line)
            })
            .collect();

        let mut order: Vec<i32> = (0..width).collect();
        for &column in &arrangeable {
            let x = order.iter().position(|&c| c == column).unwrap() as i32;
            self.move_column_to_edge(x, Direction::Left)?;
            roll_columns(&mut target, self.dies.full_max(), x, Direction::Left)?;
            order.rotate_left(x as usize);
            self.arrange_edge(&target, Direction::Left)?;
        }

        let x = order.iter().position(|&c| c == 0).unwrap() as i32;
        self.move_column_to_edge(x, Direction::Left)?;
        Ok(!arrangeable.is_empty())
    }

    /// Alternates row and column passes until neither finds an arrangeable
    /// interior line.
    ///
    /// Terminates because matched cells are never picked as swap partners, so
    /// every pass that reports work strictly grows the set of agreeing cells.
    pub fn rough_arrange(&mut self) -> Result<(), SolveError> {
        loop {
            let rows = self.arrange_rows()?;
            let columns = self.arrange_columns()?;
            if !rows && !columns {
                return Ok(());
            }
        }
    }

    /// Last-resort per-cell loop: swaps mismatched pairs until the work board
    /// equals the goal.
    ///
    /// A mutually useful partner always exists while any cell disagrees
    /// (the two boards share one cell multiset), so each round fixes at least
    /// one cell for good.
    pub fn arrange(&mut self) -> Result<(), SolveError> {
        loop {
            let Some(first) = self
                .board
                .cells()
                .find(|&(cell, value)| value != self.goal.get(cell))
                .map(|(cell, _)| cell)
            else {
                return Ok(());
            };

            let have = self.board.get(first);
            let partner = self
                .board
                .cells()
                .find(|&(cell, value)| value != self.goal.get(cell) && self.goal.get(cell) == have)
                .or_else(|| {
                    self.board
                        .cells()
                        .find(|&(cell, value)| cell != first && value != self.goal.get(cell))
                })
                .map(|(cell, _)| cell);

            let Some(partner) = partner else {
                unreachable!("a lone mismatching cell contradicts the shared cell multiset");
            };
            self.swap(first, partner)?;
        }
    }
}

/// Whether in-line swaps can bring `line` closer to `target`: some cell
/// disagrees and another mismatched cell of the line holds the wanted value.
fn is_arrangeable(line: &[u8], target: &[u8]) -> bool {
    line.iter().zip(target).enumerate().any(|(i, (&have, &want))| {
        have != want
            && line
                .iter()
                .zip(target)
                .enumerate()
                .any(|(j, (&value, &t))| j != i && value != t && value == want)
    })
}
