//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate a puzzle at a chosen difficulty level
//! - Reproduce a puzzle from a hex seed or derive one from a passphrase
//! - Display the problem, solution, and solver statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty level (default: medium):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level inhuman
//! ```
//!
//! Reproduce a puzzle from the seed printed on an earlier run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 HEX DIGITS>
//! ```
//!
//! Derive the seed from a memorable passphrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "rainy tuesday" --show-solution
//! ```

use std::{process, str::FromStr as _};

use clap::{Parser, ValueEnum};
use ninefold_core::Grid;
use ninefold_generator::{GeneratedPuzzle, Level, ParseSeedError, PuzzleGenerator, PuzzleSeed};
use ninefold_solver::BacktrackSolver;

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

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level to generate.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    level: LevelArg,

    /// Seed as 64 hex digits. Defaults to a freshly drawn random seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a passphrase instead.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Also print the solution grid.
    #[arg(long)]
    show_solution: bool,
}

fn main() {
    let args = Args::parse();

    let seed = match seed_from_args(&args) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        }
    };

    let generator = PuzzleGenerator::new();
    match generator.generate_with_seed(Level::from(args.level), seed) {
        Ok(puzzle) => print_puzzle(&puzzle, args.show_solution),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn seed_from_args(args: &Args) -> Result<PuzzleSeed, ParseSeedError> {
    if let Some(hex) = &args.seed {
        return PuzzleSeed::from_str(hex);
    }
    if let Some(phrase) = &args.phrase {
        return Ok(PuzzleSeed::from_phrase(phrase));
    }
    Ok(PuzzleSeed::random())
}

fn print_puzzle(puzzle: &GeneratedPuzzle, show_solution: bool) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Level:");
    println!("  {} ({} givens)", puzzle.level, puzzle.level.givens());
    println!();

    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();

    if show_solution {
        println!("Solution:");
        print_grid(&puzzle.solution);
        println!();
    }

    let (_, stats) = BacktrackSolver::new()
        .solve_with_stats(&puzzle.problem)
        .unwrap();
    println!("Stats:");
    println!("  solver steps: {}", stats.steps());
    println!("  memo hits: {}", stats.memo_hits());
}

fn print_grid(grid: &Grid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}
