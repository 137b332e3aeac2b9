//! Example sampling solver effort across difficulty levels.
//!
//! Generates a batch of puzzles per level and reports how many search steps
//! a backtracking solver spends on each batch. Higher levels leave fewer
//! givens, so the spread between `easy` and `inhuman` is clearly visible.
//! Generation and solving are fanned out over a rayon thread pool.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example level_stats
//! ```
//!
//! Adjust the sample count per level (default: 100):
//!
//! ```sh
//! cargo run --release --example level_stats -- --samples 500
//! ```

use std::process;

use clap::Parser;
use ninefold_generator::{Level, PuzzleGenerator};
use ninefold_solver::BacktrackSolver;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzles to generate per level.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    println!(
        "{:<10} {:>7} {:>12} {:>12} {:>12}",
        "level", "givens", "min steps", "mean steps", "max steps"
    );
    for level in Level::ALL {
        let steps = sample_steps(level, args.samples);
        let min = steps.iter().copied().min().unwrap();
        let max = steps.iter().copied().max().unwrap();
        let mean = steps.iter().sum::<u64>() / steps.len() as u64;
        println!(
            "{:<10} {:>7} {:>12} {:>12} {:>12}",
            level.to_string(),
            level.givens(),
            min,
            mean,
            max
        );
    }
}

fn sample_steps(level: Level, samples: usize) -> Vec<u64> {
    let generator = PuzzleGenerator::new();
    let solver = BacktrackSolver::new();
    (0..samples)
        .into_par_iter()
        .map(|_| {
            let puzzle = generator.generate(level).unwrap();
            let (_, stats) = solver.solve_with_stats(&puzzle.problem).unwrap();
            stats.steps()
        })
        .collect()
}
