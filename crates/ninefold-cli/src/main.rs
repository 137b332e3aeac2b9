//! Command line interface for the ninefold sudoku engine.
//!
//! Two subcommands cover the engine's surface: `generate` produces a fresh
//! or seed-reproduced puzzle, `solve` completes a grid given as text.
//!
//! ```sh
//! ninefold generate --level hard --show-solution
//! ninefold solve "53__7____ 6__195___ _98____6_ 8___6___3 4__8_3__1 7___2___6 _6____28_ ___419__5 ____8__79"
//! cat puzzle.txt | ninefold solve -
//! ```
//!
//! Solver and generator diagnostics are logged through `log`; set
//! `RUST_LOG=info` to see them.

use std::{
    io::{self, Read as _},
    process,
    str::FromStr as _,
};

use clap::{Parser, Subcommand, ValueEnum};
use ninefold_core::{Grid, ParseGridError};
use ninefold_generator::{GenerateError, Level, ParseSeedError, PuzzleGenerator, PuzzleSeed};
use ninefold_solver::{BacktrackSolver, SolveError};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle.
    Generate(GenerateArgs),
    /// Solve a puzzle given as text.
    Solve(SolveArgs),
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Difficulty level of the generated puzzle.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    level: LevelArg,

    /// Seed as 64 hex digits. Defaults to a freshly drawn random seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a passphrase instead.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Also print the solution the puzzle was carved from.
    #[arg(long)]
    show_solution: bool,

    /// Solve the generated puzzle and print the solver's result.
    #[arg(long)]
    solve: bool,
}

#[derive(Debug, clap::Args)]
struct SolveArgs {
    /// Grid as 81 cells in row-major order (`1`-`9` for givens; `.`, `_` or
    /// `0` for empty; whitespace ignored), or `-` to read standard input.
    #[arg(value_name = "GRID")]
    grid: String,

    /// Abort the search after this many solver steps.
    #[arg(long, value_name = "STEPS")]
    step_limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Insane,
    Inhuman,
}

impl From<LevelArg> for Level {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Easy => Self::Easy,
            LevelArg::Medium => Self::Medium,
            LevelArg::Hard => Self::Hard,
            LevelArg::VeryHard => Self::VeryHard,
            LevelArg::Insane => Self::Insane,
            LevelArg::Inhuman => Self::Inhuman,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] ParseGridError),
    #[display("invalid seed: {_0}")]
    InvalidSeed(#[from] ParseSeedError),
    #[display("generation failed: {_0}")]
    Generate(#[from] GenerateError),
    #[display("solving failed: {_0}")]
    Solve(#[from] SolveError),
    #[display("failed to read grid from stdin: {_0}")]
    Stdin(#[from] io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Generate(args) => generate(args),
        Command::Solve(args) => solve(args),
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => PuzzleSeed::from_str(hex)?,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let level = Level::from(args.level);
    log::info!("generating a {level} puzzle from seed {seed}");
    let puzzle = PuzzleGenerator::new().generate_with_seed(level, seed)?;

    println!("Seed:  {}", puzzle.seed);
    println!("Level: {} ({} givens)", puzzle.level, puzzle.level.givens());
    println!();
    println!("{}", puzzle.problem);

    if args.show_solution {
        println!();
        println!("Solution:");
        println!("{}", puzzle.solution);
    }

    if args.solve {
        let solved = solve_grid(&puzzle.problem, None)?;
        println!();
        println!("Solver result:");
        println!("{solved}");
    }

    Ok(())
}

fn solve(args: &SolveArgs) -> Result<(), CliError> {
    let text = if args.grid == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.grid.clone()
    };

    let grid = Grid::from_str(&text)?;
    let solved = solve_grid(&grid, args.step_limit)?;
    println!("{solved}");
    Ok(())
}

fn solve_grid(grid: &Grid, step_limit: Option<u64>) -> Result<Grid, CliError> {
    let solver = match step_limit {
        Some(limit) => BacktrackSolver::with_step_limit(limit),
        None => BacktrackSolver::new(),
    };
    let (solution, stats) = solver.solve_with_stats(grid)?;
    log::info!(
        "solved in {} steps with {} memo hits",
        stats.steps(),
        stats.memo_hits()
    );
    Ok(solution)
}
