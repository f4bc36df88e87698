use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, WrapErr as _};
use nukigata::{Answer, DieSet, OpLog, Problem, random, replay, report};
use rand::{SeedableRng, rngs::SmallRng};

/// Offline driver for the die-cutting puzzle solver.
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Solve a problem and write the answer artifacts
    Solve {
        /// Problem JSON path; without one a random board is generated
        #[arg(short, long)]
        json: Option<PathBuf>,
        /// Directory for dump.json, log.json and the report files
        #[arg(short, long, default_value = "./logs")]
        log_dir: PathBuf,
        /// Generate a random board even when a problem file is given
        #[arg(short, long)]
        force: bool,
        /// Width of a generated board
        #[arg(short = 'x', long, default_value_t = 32)]
        width: i32,
        /// Height of a generated board
        #[arg(short = 'y', long, default_value_t = 32)]
        height: i32,
        /// Seed for board generation
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Replay an answer file against a problem and report the outcome
    Reproduce {
        /// Problem JSON path (a dump.json works)
        problem: PathBuf,
        /// Answer JSON path (a log.json works)
        answer: PathBuf,
        /// Directory for the report files
        #[arg(short, long, default_value = "./reproduce")]
        log_dir: PathBuf,
    },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    match Commands::parse() {
        Commands::Solve {
            json,
            log_dir,
            force,
            width,
            height,
            seed,
        } => solve(json, log_dir, force, width, height, seed),
        Commands::Reproduce {
            problem,
            answer,
            log_dir,
        } => reproduce(problem, answer, log_dir),
    }
}

fn solve(
    json: Option<PathBuf>,
    log_dir: PathBuf,
    force: bool,
    width: i32,
    height: i32,
    seed: Option<u64>,
) -> eyre::Result<()> {
    let problem = match json {
        Some(path) if !force => {
            let text = fs::read_to_string(&path)
                .wrap_err_with(|| format!("couldn't read {}", path.display()))?;
            Problem::parse(&text)?
        }
        _ => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let (start, goal) = random::random_boards(width, height, &mut rng);
            Problem::from_boards(&start, &goal, &DieSet::standard())
        }
    };
    report::dump_problem(&problem, &log_dir)?;

    let mut solver = problem.session()?;
    solver.solve()?;
    report::save_logs(solver.board(), solver.goal(), solver.log(), &log_dir)?;

    println!(
        "Solved the {}x{} board in {} operations.",
        solver.board().width(),
        solver.board().height(),
        solver.log().len(),
    );
    Ok(())
}

fn reproduce(problem: PathBuf, answer: PathBuf, log_dir: PathBuf) -> eyre::Result<()> {
    let problem = Problem::parse(
        &fs::read_to_string(&problem)
            .wrap_err_with(|| format!("couldn't read {}", problem.display()))?,
    )?;
    let answer: Answer = serde_json::from_str(
        &fs::read_to_string(&answer)
            .wrap_err_with(|| format!("couldn't read {}", answer.display()))?,
    )
    .wrap_err("malformed answer input")?;

    let (start, goal, dies) = problem.boards_and_dies()?;
    let board = replay(&start, &dies, &answer.ops)?;

    let log: OpLog = answer.ops.iter().copied().collect();
    report::save_logs(&board, &goal, &log, &log_dir)?;

    let matched = board
        .cells()
        .filter(|&(cell, value)| value == goal.get(cell))
        .count();
    println!(
        "Replayed {} operations; {matched}/{} cells match the goal.",
        log.len(),
        board.width() * board.height(),
    );
    Ok(())
}
