//! The problem input wire format and its conversion into a solving session.

use color_eyre::eyre::{self, WrapErr as _, ensure};
use nukigata_board::{Board, DieSet};
use nukigata_solver::Solver;
use serde::{Deserialize, Serialize};

/// A full problem: the board pair and any general dies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub board: BoardSpec,
    pub general: General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub width: i32,
    pub height: i32,
    pub start: Vec<String>,
    pub goal: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    pub n: usize,
    pub patterns: Vec<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub p: u32,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<String>,
}

impl Problem {
    pub fn parse(json: &str) -> eyre::Result<Problem> {
        serde_json::from_str(json).wrap_err("malformed problem input")
    }

    /// The dump representation of an existing session, mirroring the problem
    /// input plus the appended general dies.
    pub fn from_boards(start: &Board, goal: &Board, dies: &DieSet) -> Problem {
        Problem {
            board: BoardSpec {
                width: start.width(),
                height: start.height(),
                start: start.to_rows(),
                goal: goal.to_rows(),
            },
            general: General {
                n: dies.general().count(),
                patterns: dies
                    .general()
                    .map(|die| Pattern {
                        p: die.id(),
                        width: die.width(),
                        height: die.height(),
                        cells: die.stencil_rows(),
                    })
                    .collect(),
            },
        }
    }

    /// Builds the boards and die catalog this problem describes.
    ///
    /// General dies are renumbered from 26 in input order; the solver itself
    /// only ever punches standard dies, so the declared `p` values are not
    /// consulted.
    pub fn boards_and_dies(&self) -> eyre::Result<(Board, Board, DieSet)> {
        let start = Board::from_rows(&self.board.start).wrap_err("malformed start board")?;
        let goal = Board::from_rows(&self.board.goal).wrap_err("malformed goal board")?;
        for (name, board) in [("start", &start), ("goal", &goal)] {
            ensure!(
                (board.width(), board.height()) == (self.board.width, self.board.height),
                "{name} board is {}x{} but the header says {}x{}",
                board.width(),
                board.height(),
                self.board.width,
                self.board.height,
            );
        }

        let mut dies = DieSet::standard();
        for pattern in &self.general.patterns {
            let die = dies
                .add_general(&pattern.cells)
                .wrap_err_with(|| format!("malformed general die {}", pattern.p))?;
            ensure!(
                (die.width(), die.height()) == (pattern.width, pattern.height),
                "general die {} is {}x{} but its header says {}x{}",
                pattern.p,
                die.width(),
                die.height(),
                pattern.width,
                pattern.height,
            );
        }

        Ok((start, goal, dies))
    }

    /// Opens a solving session for this problem.
    pub fn session(&self) -> eyre::Result<Solver> {
        let (start, goal, dies) = self.boards_and_dies()?;
        Ok(Solver::new(start, goal, dies))
    }
}
