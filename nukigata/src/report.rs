//! Session artifacts written to the log directory.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{self, WrapErr as _};
use nukigata_board::{Board, OpLog};

use crate::Problem;

/// Writes `dump.json`: the problem input mirrored back out, including any
/// appended general dies. Solving a dump reproduces the session.
pub fn dump_problem(problem: &Problem, dir: impl AsRef<Path>) -> eyre::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).wrap_err("couldn't create the log directory")?;
    let json = serde_json::to_string_pretty(problem)?;
    fs::write(dir.join("dump.json"), json).wrap_err("couldn't write dump.json")?;
    Ok(())
}

/// Writes the end-of-session report: final board, goal, agreement map, a
/// short text summary, and the answer log.
pub fn save_logs(
    board: &Board,
    goal: &Board,
    log: &OpLog,
    dir: impl AsRef<Path>,
) -> eyre::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).wrap_err("couldn't create the log directory")?;

    fs::write(dir.join("board.txt"), rows_as_text(board))?;
    fs::write(dir.join("goal.txt"), rows_as_text(goal))?;

    let agreement: String = (0..board.height())
        .map(|y| {
            let row: String = board
                .row(y)
                .iter()
                .zip(goal.row(y))
                .map(|(have, want)| if have == want { '1' } else { '0' })
                .collect();
            row + "\n"
        })
        .collect();
    fs::write(dir.join("result_map.txt"), agreement)?;

    let total = board.width() * board.height();
    let matched = board
        .cells()
        .filter(|&(cell, value)| value == goal.get(cell))
        .count() as i32;
    let summary = format!(
        "Width: {}\nHeight: {}\n\nn: {}\n\nTrue: {}\nFalse: {}\nTrue rate: {:.2}%\n",
        board.width(),
        board.height(),
        log.len(),
        matched,
        total - matched,
        100.0 * f64::from(matched) / f64::from(total),
    );
    fs::write(dir.join("result.txt"), summary)?;

    let answer = serde_json::to_string_pretty(&log.to_answer())?;
    fs::write(dir.join("log.json"), answer).wrap_err("couldn't write log.json")?;
    Ok(())
}

fn rows_as_text(board: &Board) -> String {
    board
        .to_rows()
        .into_iter()
        .map(|row| row + "\n")
        .collect()
}
