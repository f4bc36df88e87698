/// Side length of the largest standard die. Also the upper bound on board
/// dimensions, so a `Full` die of this size always blankets the whole board.
pub const MAX_SIZE: i32 = 256;

/// The three standard stencil layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DieKind {
    Full,
    EvenRow,
    EvenColumn,
}

impl DieKind {
    pub fn iter() -> impl Iterator<Item = DieKind> {
        [DieKind::Full, DieKind::EvenRow, DieKind::EvenColumn].into_iter()
    }
}

/// A cutting die: a rectangular boolean stencil with a wire id.
///
/// Standard dies carry their [`DieKind`]; general (user-supplied) dies have
/// none. Dies are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuttingDie {
    id: u32,
    width: i32,
    height: i32,
    kind: Option<DieKind>,
    stencil: Vec<bool>,
}

impl CuttingDie {
    /// Builds the standard `size × size` die of the given kind.
    ///
    /// `Full` is all-true; `EvenRow` blanks every odd row; `EvenColumn` every
    /// odd column.
    pub fn standard(id: u32, size: i32, kind: DieKind) -> CuttingDie {
        let stencil = (0..size)
            .flat_map(|row| {
                (0..size).map(move |column| match kind {
                    DieKind::Full => true,
                    DieKind::EvenRow => row % 2 == 0,
                    DieKind::EvenColumn => column % 2 == 0,
                })
            })
            .collect();

        CuttingDie {
            id,
            width: size,
            height: size,
            kind: Some(kind),
            stencil,
        }
    }

    /// Builds a general die from its wire rows (`'0'`/`'1'` per stencil cell).
    pub fn general(id: u32, rows: &[String]) -> Result<CuttingDie, GridParseError> {
        let cells = parse_rows(rows)?;
        Ok(CuttingDie {
            id,
            width: rows.first().map_or(0, |row| row.chars().count()) as i32,
            height: rows.len() as i32,
            kind: None,
            stencil: cells.into_iter().map(|cell| cell != 0).collect(),
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
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
    pub fn kind(&self) -> Option<DieKind> {
        self.kind
    }

    /// Whether the stencil is punched at die-local `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the stencil.
    #[inline]
    pub fn covers(&self, x: i32, y: i32) -> bool {
        assert!(0 <= x && x < self.width && 0 <= y && y < self.height);
        self.stencil[(y * self.width + x) as usize]
    }

    /// Stencil rows in the wire representation, for dump files.
    pub fn stencil_rows(&self) -> Vec<String> {
        self.stencil
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|&cell| if cell { '1' } else { '0' }).collect())
            .collect()
    }
}

/// Parses the wire representation of a grid: one string per row, one decimal
/// digit per cell, row-major result. The grid must be rectangular and
/// non-empty.
pub fn parse_rows(rows: &[String]) -> Result<Vec<u8>, GridParseError> {
    let expected = rows.first().map_or(0, |row| row.chars().count());
    if expected == 0 {
        return Err(GridParseError::Empty);
    }

    let mut cells = Vec::with_capacity(rows.len() * expected);
    for (y, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != expected {
            return Err(GridParseError::RaggedRow { row: y, len, expected });
        }
        for (x, ch) in row.chars().enumerate() {
            match ch.to_digit(10) {
                Some(digit) => cells.push(digit as u8),
                None => {
                    return Err(GridParseError::BadDigit { ch, row: y, column: x });
                }
            }
        }
    }
    Ok(cells)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("invalid cell digit {ch:?} at row {row}, column {column}")]
    BadDigit { ch: char, row: usize, column: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("the grid has no cells")]
    Empty,
}

#[cfg(feature = "quickcheck")]
mod quickcheck_impl {
    use super::*;
    use quickcheck::{Arbitrary, Gen};

    impl Arbitrary for DieKind {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&[DieKind::Full, DieKind::EvenRow, DieKind::EvenColumn])
                .unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_stencils() {
        let full = CuttingDie::standard(2, 4, DieKind::Full);
        assert!((0..4).all(|y| (0..4).all(|x| full.covers(x, y))));

        let even_row = CuttingDie::standard(3, 4, DieKind::EvenRow);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(even_row.covers(x, y), y % 2 == 0);
            }
        }

        let even_column = CuttingDie::standard(4, 4, DieKind::EvenColumn);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(even_column.covers(x, y), x % 2 == 0);
            }
        }
    }

    #[test]
    fn general_die_round_trips_through_wire_rows() {
        let rows = vec!["0111".to_string(), "1001".to_string()];
        let die = CuttingDie::general(26, &rows).unwrap();
        assert_eq!(die.id(), 26);
        assert_eq!((die.width(), die.height()), (4, 2));
        assert_eq!(die.kind(), None);
        assert!(!die.covers(0, 0) && die.covers(1, 0));
        assert!(die.covers(0, 1) && !die.covers(1, 1));
        assert_eq!(die.stencil_rows(), rows);
    }

    #[test]
    fn parse_rows_reports_the_offending_cell() {
        let err = parse_rows(&["01".to_string(), "2x".to_string()]).unwrap_err();
        assert_eq!(
            err,
            GridParseError::BadDigit {
                ch: 'x',
                row: 1,
                column: 1
            }
        );
    }

    #[test]
    fn parse_rows_rejects_ragged_and_empty_grids() {
        let err = parse_rows(&["012".to_string(), "01".to_string()]).unwrap_err();
        assert_eq!(
            err,
            GridParseError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        );
        assert_eq!(parse_rows(&[]).unwrap_err(), GridParseError::Empty);
        assert_eq!(parse_rows(&[String::new()]).unwrap_err(), GridParseError::Empty);
    }
}
