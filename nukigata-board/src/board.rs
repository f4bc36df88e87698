use std::fmt::{self, Write as _};

use nukigata_core::{Cell, Corners, Direction};
use owo_colors::{OwoColorize, Rgb};

use crate::{CuttingDie, CuttingInfo, GridParseError, parse_rows};

/// A rectangular grid of digit cells.
///
/// Every mutation goes through [`Board::apply_die`]; the cell values are a
/// fixed multiset that operations only ever permute.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    corners: Corners,
    field: Vec<u8>,
}

impl Board {
    /// # Panics
    ///
    /// If `field` does not hold exactly `width × height` cells.
    pub fn new(width: i32, height: i32, field: Vec<u8>) -> Board {
        assert!(width > 0 && height > 0);
        assert_eq!(field.len(), (width * height) as usize);
        Board {
            width,
            height,
            corners: Corners::new(width, height),
            field,
        }
    }

    /// Parses the wire representation: one string per row, one digit per cell.
    pub fn from_rows(rows: &[String]) -> Result<Board, GridParseError> {
        let width = rows.first().map_or(0, |row| row.chars().count()) as i32;
        Ok(Board::new(width, rows.len() as i32, parse_rows(rows)?))
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        0 <= cell.x && cell.x < self.width && 0 <= cell.y && cell.y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.contains(Cell::new(x, y)));
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> u8 {
        self.field[self.index(cell.x, cell.y)]
    }

    pub fn row(&self, y: i32) -> &[u8] {
        let start = self.index(0, y);
        &self.field[start..start + self.width as usize]
    }

    pub fn column(&self, x: i32) -> impl Iterator<Item = u8> + '_ {
        (0..self.height).map(move |y| self.field[self.index(x, y)])
    }

    /// All cells with their values, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| (Cell::new(x, y), self.field[self.index(x, y)]))
        })
    }

    /// The wire representation, one string of digits per row.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|value| char::from(b'0' + value))
                    .collect()
            })
            .collect()
    }

    /// Punches `die` anchored at `cell` and shifts toward `direction`.
    ///
    /// Every line crossing the stencil is stably partitioned into its
    /// uncovered and covered cells; `Up`/`Left` place the uncovered run first,
    /// `Down`/`Right` the covered run. The anchor may be negative (the die
    /// overhanging the top or left edge) as long as at least one stencil cell
    /// lands on the board.
    pub fn apply_die(
        &mut self,
        die: &CuttingDie,
        cell: Cell,
        direction: Direction,
    ) -> Result<CuttingInfo, OutOfBounds> {
        if cell.x >= self.width
            || cell.y >= self.height
            || -cell.x >= die.width()
            || -cell.y >= die.height()
        {
            return Err(OutOfBounds {
                die_id: die.id(),
                anchor: cell,
                width: self.width,
                height: self.height,
            });
        }

        let x_start = cell.x.max(0);
        let x_end = self.width.min(cell.x + die.width());
        let y_start = cell.y.max(0);
        let y_end = self.height.min(cell.y + die.height());

        if direction.is_vertical() {
            for x in x_start..x_end {
                let (covered, uncovered) = partition_line((0..self.height).map(|y| {
                    let masked =
                        (y_start..y_end).contains(&y) && die.covers(x - cell.x, y - cell.y);
                    (masked, self.field[self.index(x, y)])
                }));
                let line = match direction {
                    Direction::Up => uncovered.into_iter().chain(covered),
                    _ => covered.into_iter().chain(uncovered),
                };
                for (y, value) in line.enumerate() {
                    let index = self.index(x, y as i32);
                    self.field[index] = value;
                }
            }
        } else {
            for y in y_start..y_end {
                let (covered, uncovered) = partition_line((0..self.width).map(|x| {
                    let masked =
                        (x_start..x_end).contains(&x) && die.covers(x - cell.x, y - cell.y);
                    (masked, self.field[self.index(x, y)])
                }));
                let line = match direction {
                    Direction::Left => uncovered.into_iter().chain(covered),
                    _ => covered.into_iter().chain(uncovered),
                };
                for (x, value) in line.enumerate() {
                    let index = self.index(x as i32, y);
                    self.field[index] = value;
                }
            }
        }

        Ok(CuttingInfo {
            p: die.id(),
            x: cell.x,
            y: cell.y,
            s: direction,
        })
    }
}

/// Splits `(masked, value)` pairs into the masked and unmasked values,
/// preserving order within each run.
fn partition_line(line: impl Iterator<Item = (bool, u8)>) -> (Vec<u8>, Vec<u8>) {
    let mut masked = Vec::new();
    let mut unmasked = Vec::new();
    for (is_masked, value) in line {
        if is_masked {
            masked.push(value);
        } else {
            unmasked.push(value);
        }
    }
    (masked, unmasked)
}

/// A die application whose stencil misses the board entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("die {die_id} anchored at {anchor} covers no cell of a {width}x{height} board")]
pub struct OutOfBounds {
    pub die_id: u32,
    pub anchor: Cell,
    pub width: i32,
    pub height: i32,
}

const COLOR_SCHEME: fn(u8) -> Rgb = |value| match value {
    0 => Rgb(250, 250, 250),
    1 => Rgb(217, 39, 39),
    2 => Rgb(109, 242, 116),
    3 => Rgb(79, 123, 212),
    _ => Rgb(255, 224, 0),
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &value in self.row(y) {
                write!(f, "{}", "██".color(COLOR_SCHEME(value)))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}", self.width, self.height)?;
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "quickcheck")]
mod quickcheck_impl {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for Board {
        fn arbitrary(g: &mut Gen) -> Self {
            let width = 1 + (u8::arbitrary(g) as i32) % 16;
            let height = 1 + (u8::arbitrary(g) as i32) % 16;
            let field = (0..width * height).map(|_| u8::arbitrary(g) % 4).collect();
            Board::new(width, height, field)
        }
    }
}
