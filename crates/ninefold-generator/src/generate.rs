//! Randomized grid construction and cell removal.

use ninefold_core::{Digit, Grid, Position};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

/// An error produced while generating a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The backtracking fill exhausted its search space without producing a
    /// complete grid. Cannot happen when starting from an empty grid, but
    /// the error is kept representable rather than papered over with a
    /// panic.
    #[display("failed to construct a complete grid")]
    NoCompleteGrid,
    /// More cell removals were requested than there are filled cells.
    #[display("cannot remove {requested} cells, only {available} are filled")]
    TooManyRemovals {
        /// Number of removals requested.
        requested: usize,
        /// Number of filled cells in the grid.
        available: usize,
    },
}

/// Builds a random fully-solved grid.
///
/// Cells are filled in row-major order by depth-first backtracking; at each
/// cell the nine digits are shuffled (a Fisher-Yates shuffle, uniform over
/// permutations) and tried in that order, so every complete grid is
/// reachable. Dead ends revert the cell and backtrack.
///
/// # Errors
///
/// Returns [`GenerateError::NoCompleteGrid`] if the search exhausts without
/// completing the grid, which a correct legality check makes unreachable
/// from an empty start.
///
/// # Examples
///
/// ```
/// use ninefold_generator::random_solution;
///
/// let solution = random_solution(&mut rand::rng())?;
/// assert!(solution.is_solved());
/// # Ok::<(), ninefold_generator::GenerateError>(())
/// ```
pub fn random_solution<R>(rng: &mut R) -> Result<Grid, GenerateError>
where
    R: Rng + ?Sized,
{
    let mut grid = Grid::new();
    if fill_from(&mut grid, rng) {
        Ok(grid)
    } else {
        Err(GenerateError::NoCompleteGrid)
    }
}

fn fill_from<R>(grid: &mut Grid, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_safe(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Returns a copy of `solution` with `count` randomly chosen cells cleared.
///
/// Positions are drawn uniformly and redrawn when they hit an already-empty
/// cell, so each filled cell is equally likely to go. The input grid is not
/// required to be complete, or even consistent; only the filled-cell count
/// matters.
///
/// # Errors
///
/// Returns [`GenerateError::TooManyRemovals`] if `count` exceeds the number
/// of filled cells. Without this check the redraw loop could never finish.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{random_solution, remove_cells};
///
/// let mut rng = rand::rng();
/// let solution = random_solution(&mut rng)?;
/// let problem = remove_cells(&solution, 38, &mut rng)?;
///
/// assert_eq!(problem.empty_count(), 38);
/// # Ok::<(), ninefold_generator::GenerateError>(())
/// ```
pub fn remove_cells<R>(solution: &Grid, count: u8, rng: &mut R) -> Result<Grid, GenerateError>
where
    R: Rng + ?Sized,
{
    let available = solution.filled_count();
    if usize::from(count) > available {
        return Err(GenerateError::TooManyRemovals {
            requested: usize::from(count),
            available,
        });
    }

    let mut grid = solution.clone();
    let mut remaining = count;
    while remaining > 0 {
        let pos = Position::from_index(rng.random_range(0..81));
        if grid.cell(pos).is_some() {
            grid.set(pos, None);
            remaining -= 1;
        }
    }
    Ok(grid)
}
