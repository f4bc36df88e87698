use nukigata_board::{Board, CuttingDie, CuttingInfo, DieKind, DieSet, OpLog};
use nukigata_core::{Cell, Direction};

use crate::SolveError;

/// A solving session: one mutable work board, the immutable goal, the die
/// catalog, and the operation log.
///
/// Every operation applied to the work board is logged; scratch boards (the
/// goal copies the coarse aligner rolls alongside the work board) go through
/// the free [`roll_rows`]/[`roll_columns`] helpers and are never logged.
#[derive(Debug, Clone)]
pub struct Solver {
    pub(crate) board: Board,
    pub(crate) goal: Board,
    pub(crate) dies: DieSet,
    pub(crate) log: OpLog,
}

impl Solver {
    /// # Panics
    ///
    /// If the boards disagree in shape or cell multiset; a goal that is not a
    /// rearrangement of the start can never be reached.
    pub fn new(start: Board, goal: Board, dies: DieSet) -> Solver {
        assert_eq!(
            (start.width(), start.height()),
            (goal.width(), goal.height()),
            "start and goal boards must have the same shape",
        );

        let mut start_values: Vec<u8> = start.cells().map(|(_, value)| value).collect();
        let mut goal_values: Vec<u8> = goal.cells().map(|(_, value)| value).collect();
        start_values.sort_unstable();
        goal_values.sort_unstable();
        assert_eq!(
            start_values, goal_values,
            "the goal must be a rearrangement of the start board",
        );

        Solver {
            board: start,
            goal,
            dies,
            log: OpLog::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    #[inline]
    pub fn dies(&self) -> &DieSet {
        &self.dies
    }

    #[inline]
    pub fn log(&self) -> &OpLog {
        &self.log
    }

    /// Whether the work board has reached the goal.
    pub fn is_goal(&self) -> bool {
        self.board == self.goal
    }

    /// Runs coarse then fine alignment to completion and returns the log.
    pub fn solve(&mut self) -> Result<&OpLog, SolveError> {
        self.rough_arrange()?;
        self.arrange()?;
        debug_assert!(self.is_goal());
        Ok(&self.log)
    }

    /// Applies the standard `Full` die of the given size to the work board
    /// and logs the operation.
    pub(crate) fn apply_full(
        &mut self,
        size: i32,
        cell: Cell,
        direction: Direction,
    ) -> Result<(), SolveError> {
        let die = self
            .dies
            .get(size, DieKind::Full)
            .ok_or(SolveError::UnknownStandardDie {
                size,
                kind: DieKind::Full,
            })?;
        let info = self.board.apply_die(die, cell, direction)?;
        self.log.push(info);
        Ok(())
    }

    /// Rotates the work board so that `row` reaches the top (`Up`) or bottom
    /// (`Down`) edge, logging the shift. Rows already on the edge need none.
    pub(crate) fn move_row_to_edge(
        &mut self,
        row: i32,
        direction: Direction,
    ) -> Result<(), SolveError> {
        if let Some(info) = roll_rows(&mut self.board, self.dies.full_max(), row, direction)? {
            self.log.push(info);
        }
        Ok(())
    }

    /// Column analogue of [`Solver::move_row_to_edge`] for `Left`/`Right`.
    pub(crate) fn move_column_to_edge(
        &mut self,
        column: i32,
        direction: Direction,
    ) -> Result<(), SolveError> {
        if let Some(info) = roll_columns(&mut self.board, self.dies.full_max(), column, direction)? {
            self.log.push(info);
        }
        Ok(())
    }
}

/// Rotates all columns of `board` so that `row` lands on the top (`Up`) or
/// bottom (`Down`) edge, using one blanket-die shift. Returns the operation,
/// or `None` when the row is already there.
pub(crate) fn roll_rows(
    board: &mut Board,
    full_max: &CuttingDie,
    row: i32,
    direction: Direction,
) -> Result<Option<CuttingInfo>, SolveError> {
    debug_assert!(0 <= row && row < board.height());
    match direction {
        Direction::Up if row > 0 => {
            let anchor = Cell::new(0, row - full_max.height());
            Ok(Some(board.apply_die(full_max, anchor, direction)?))
        }
        Direction::Down if row < board.height() - 1 => {
            let anchor = Cell::new(0, row + 1);
            Ok(Some(board.apply_die(full_max, anchor, direction)?))
        }
        Direction::Up | Direction::Down => Ok(None),
        dir => Err(SolveError::UnsupportedDirection(dir)),
    }
}

/// Row analogue of [`roll_rows`]: moves `column` to the left or right edge.
pub(crate) fn roll_columns(
    board: &mut Board,
    full_max: &CuttingDie,
    column: i32,
    direction: Direction,
) -> Result<Option<CuttingInfo>, SolveError> {
    debug_assert!(0 <= column && column < board.width());
    match direction {
        Direction::Left if column > 0 => {
            let anchor = Cell::new(column - full_max.width(), 0);
            Ok(Some(board.apply_die(full_max, anchor, direction)?))
        }
        Direction::Right if column < board.width() - 1 => {
            let anchor = Cell::new(column + 1, 0);
            Ok(Some(board.apply_die(full_max, anchor, direction)?))
        }
        Direction::Left | Direction::Right => Ok(None),
        dir => Err(SolveError::UnsupportedDirection(dir)),
    }
}

/// Replays an operation log against `start`, returning the resulting board.
///
/// Replaying the log a session produced from its start board reproduces its
/// final work board bit for bit.
pub fn replay(start: &Board, dies: &DieSet, ops: &[CuttingInfo]) -> Result<Board, SolveError> {
    let mut board = start.clone();
    for info in ops {
        let die = dies.by_id(info.p).ok_or(SolveError::UnknownDieId(info.p))?;
        board.apply_die(die, Cell::new(info.x, info.y), info.s)?;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        let rows: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn roll_helpers_reject_off_axis_directions() {
        let mut work = board(&["0123", "1230", "2301"]);
        let dies = DieSet::standard();
        assert_eq!(
            roll_rows(&mut work, dies.full_max(), 1, Direction::Left).unwrap_err(),
            SolveError::UnsupportedDirection(Direction::Left),
        );
        assert_eq!(
            roll_columns(&mut work, dies.full_max(), 1, Direction::Down).unwrap_err(),
            SolveError::UnsupportedDirection(Direction::Down),
        );
    }

    #[test]
    fn rolling_an_edge_line_is_a_no_op() {
        let original = board(&["0123", "1230", "2301"]);
        let dies = DieSet::standard();

        let mut work = original.clone();
        assert!(roll_rows(&mut work, dies.full_max(), 0, Direction::Up).unwrap().is_none());
        assert!(roll_rows(&mut work, dies.full_max(), 2, Direction::Down).unwrap().is_none());
        assert!(roll_columns(&mut work, dies.full_max(), 0, Direction::Left).unwrap().is_none());
        assert!(roll_columns(&mut work, dies.full_max(), 3, Direction::Right).unwrap().is_none());
        assert_eq!(work, original);
    }

    #[test]
    fn rolling_rows_rotates_the_board() {
        let dies = DieSet::standard();

        let mut work = board(&["0000", "1111", "2222"]);
        roll_rows(&mut work, dies.full_max(), 2, Direction::Up).unwrap();
        assert_eq!(work, board(&["2222", "0000", "1111"]));

        let mut work = board(&["0000", "1111", "2222"]);
        roll_rows(&mut work, dies.full_max(), 0, Direction::Down).unwrap();
        assert_eq!(work, board(&["1111", "2222", "0000"]));

        let mut work = board(&["012", "012", "012"]);
        roll_columns(&mut work, dies.full_max(), 1, Direction::Left).unwrap();
        assert_eq!(work, board(&["120", "120", "120"]));

        let mut work = board(&["012", "012", "012"]);
        roll_columns(&mut work, dies.full_max(), 1, Direction::Right).unwrap();
        assert_eq!(work, board(&["201", "201", "201"]));
    }

    #[test]
    fn work_board_shifts_are_logged_and_replayable() {
        let start = board(&["0123", "1230", "2301"]);
        let mut solver = Solver::new(start.clone(), start.clone(), DieSet::standard());

        solver.move_row_to_edge(1, Direction::Up).unwrap();
        solver.move_column_to_edge(2, Direction::Left).unwrap();
        solver.move_row_to_edge(0, Direction::Up).unwrap();
        assert_eq!(solver.log().len(), 2);

        let replayed = replay(&start, solver.dies(), solver.log().ops()).unwrap();
        assert_eq!(&replayed, solver.board());
    }

    #[test]
    #[should_panic(expected = "rearrangement")]
    fn mismatched_multisets_are_rejected() {
        let start = board(&["01", "23"]);
        let goal = board(&["00", "23"]);
        Solver::new(start, goal, DieSet::standard());
    }

    #[test]
    fn replay_rejects_unknown_die_ids() {
        let start = board(&["01", "23"]);
        let ops = [CuttingInfo {
            p: 26,
            x: 0,
            y: 0,
            s: Direction::Up,
        }];
        let err = replay(&start, &DieSet::standard(), &ops).unwrap_err();
        assert_eq!(err, SolveError::UnknownDieId(26));
    }
}
