//! Seed-driven puzzle generation.

use ninefold_core::Grid;
use ninefold_solver::{BacktrackSolver, SolveError};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{
    generate::{GenerateError, random_solution, remove_cells},
    level::Level,
    seed::PuzzleSeed,
};

/// Generates Sudoku puzzles from explicit or freshly drawn seeds.
///
/// All randomness flows through a [`PuzzleSeed`], so a `(seed, level)` pair
/// always reproduces the same puzzle.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Level, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("ninefold");
///
/// let first = generator.generate_with_seed(Level::Medium, seed)?;
/// let second = generator.generate_with_seed(Level::Medium, seed)?;
/// assert_eq!(first.problem, second.problem);
/// # Ok::<(), ninefold_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle for `level` from a freshly drawn random seed.
    ///
    /// The drawn seed is recorded in the returned puzzle, so any result can
    /// be reproduced later with [`generate_with_seed`](Self::generate_with_seed).
    ///
    /// # Errors
    ///
    /// Returns an error if puzzle generation fails, which cannot happen for
    /// the removal counts the [`Level`]s prescribe.
    pub fn generate(&self, level: Level) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(level, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed` and `level`.
    ///
    /// A single PRNG seeded from `seed` drives both the construction of the
    /// complete solution and the choice of cells to carve out. The solution
    /// is built before any carving, so puzzles generated from the same seed
    /// share their solution across levels.
    ///
    /// # Errors
    ///
    /// Returns an error if puzzle generation fails, which cannot happen for
    /// the removal counts the [`Level`]s prescribe.
    pub fn generate_with_seed(
        &self,
        level: Level,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64::from_seed(seed.to_bytes());
        let solution = random_solution(&mut rng)?;
        let problem = remove_cells(&solution, level.removals(), &mut rng)?;
        Ok(GeneratedPuzzle {
            solution,
            problem,
            seed,
            level,
        })
    }
}

/// A generated puzzle together with the solution it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The complete grid the puzzle was carved from.
    pub solution: Grid,
    /// The puzzle grid presented to the player.
    pub problem: Grid,
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The difficulty level the puzzle was generated for.
    pub level: Level,
}

impl GeneratedPuzzle {
    /// Solves [`problem`](Self::problem) from scratch with a
    /// [`BacktrackSolver`].
    ///
    /// The returned grid may differ from [`solution`](Self::solution): heavy
    /// carving routinely leaves puzzles with more than one completion, and
    /// the solver picks the one its search order reaches first.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::StepLimitExceeded`] if the solver's default
    /// step limit runs out before a completion is found.
    pub fn solve_problem(&self) -> Result<Grid, SolveError> {
        BacktrackSolver::new().solve(&self.problem)
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::Position;

    use super::*;

    #[test]
    fn test_generate_with_seed_is_deterministic() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("determinism");
        let a = generator.generate_with_seed(Level::Medium, seed).unwrap();
        let b = generator.generate_with_seed(Level::Medium, seed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_levels_control_removals() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("levels");
        for level in Level::ALL {
            let puzzle = generator.generate_with_seed(level, seed).unwrap();
            assert!(puzzle.solution.is_solved());
            assert_eq!(puzzle.problem.empty_count(), usize::from(level.removals()));
            assert_eq!(puzzle.level, level);
            assert_eq!(puzzle.seed, seed);
        }
    }

    #[test]
    fn test_same_seed_shares_solution_across_levels() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("shared solution");
        let easy = generator.generate_with_seed(Level::Easy, seed).unwrap();
        let inhuman = generator.generate_with_seed(Level::Inhuman, seed).unwrap();
        assert_eq!(easy.solution, inhuman.solution);
        assert_ne!(easy.problem, inhuman.problem);
    }

    #[test]
    fn test_problem_is_subset_of_solution() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator
            .generate_with_seed(Level::Hard, PuzzleSeed::from_phrase("subset"))
            .unwrap();
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.cell(pos) {
                assert_eq!(puzzle.solution.cell(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_generate_draws_fresh_seeds() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate(Level::Easy).unwrap();
        let b = generator.generate(Level::Easy).unwrap();
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_solve_problem_respects_givens() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator
            .generate_with_seed(Level::VeryHard, PuzzleSeed::from_phrase("solve me"))
            .unwrap();
        let solved = puzzle.solve_problem().unwrap();
        assert!(solved.is_solved());
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.cell(pos) {
                assert_eq!(solved.cell(pos), Some(digit));
            }
        }
    }
}
