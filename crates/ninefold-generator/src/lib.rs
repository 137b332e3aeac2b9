//! Random puzzle generation for the ninefold sudoku engine.
//!
//! Puzzles come out of a two-phase pipeline: a complete solution grid is
//! built by randomized backtracking, then a level-dependent number of cells
//! is carved out of it, leaving the problem grid. Both phases draw from a
//! single PRNG seeded by a [`PuzzleSeed`], so every puzzle can be
//! reproduced from its seed.
//!
//! # Overview
//!
//! - [`level`]: Difficulty levels and their removal counts
//! - [`seed`]: 256-bit seeds, with hex and passphrase conversions
//! - [`generate`]: Solution construction and cell carving primitives
//! - [`generator`]: The seed-driven [`PuzzleGenerator`] front end
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{Level, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("ninefold docs");
//! let puzzle = generator.generate_with_seed(Level::Hard, seed)?;
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.empty_count(), 47);
//! # Ok::<(), ninefold_generator::GenerateError>(())
//! ```

pub mod generate;
pub mod generator;
pub mod level;
pub mod seed;

// Re-export commonly used types
pub use self::{
    generate::{GenerateError, random_solution, remove_cells},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    level::Level,
    seed::{ParseSeedError, PuzzleSeed},
};
