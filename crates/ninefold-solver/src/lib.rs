//! Exhaustive backtracking solver for 9x9 sudoku.
//!
//! This crate provides [`BacktrackSolver`], a depth-first search over the
//! first empty cell of a [`Grid`]. Candidate digits are tried in ascending
//! order, dead ends are undone, and every fully-expanded search state is
//! memoized for the duration of one solve call so that converging branches
//! are not explored twice.
//!
//! The solver never mutates its input: it works on a private copy and
//! returns the solved grid as a new value.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Grid;
//! use ninefold_solver::BacktrackSolver;
//!
//! let puzzle: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve(&puzzle)?;
//! assert!(solution.is_solved());
//! # Ok::<(), ninefold_solver::SolveError>(())
//! ```

use std::collections::HashMap;

use ninefold_core::{ConsistencyError, Grid};

/// Default ceiling on search steps.
///
/// An ordinary 9x9 search finishes many orders of magnitude below this; the
/// limit exists so that a pathological input surfaces as an error instead of
/// an unbounded computation.
const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// An error produced by [`BacktrackSolver::solve`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The input grid already contains a duplicate digit in a row, column or
    /// box. Detected before the search starts.
    #[display("inconsistent grid: {_0}")]
    Inconsistent(#[from] ConsistencyError),
    /// The search space was exhausted without finding a solution.
    #[display("no solution exists for the given grid")]
    Unsolvable,
    /// The search was aborted after expanding `limit` states.
    #[display("search aborted after {limit} steps")]
    StepLimitExceeded {
        /// The configured step limit.
        limit: u64,
    },
}

/// Statistics collected during one solve call.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let (solution, stats) = solver.solve_with_stats(&Grid::new())?;
/// assert!(solution.is_solved());
/// assert!(stats.steps() > 0);
/// # Ok::<(), ninefold_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    steps: u64,
    memo_hits: u64,
}

impl SolveStats {
    /// Returns the number of search states expanded.
    ///
    /// Every visited state counts one step, including the final complete
    /// grid, so a successful solve reports at least 1.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns how many times a state was answered from the memoization
    /// table instead of being expanded again.
    #[must_use]
    pub fn memo_hits(&self) -> u64 {
        self.memo_hits
    }
}

/// A solver that fills a grid by exhaustive backtracking search.
///
/// The search always expands the first empty cell in row-major order and
/// tries its candidate digits in ascending order, so results are fully
/// deterministic for a given input. Search states are memoized per call,
/// keyed on the exact cell contents of the grid; both solved and unsolvable
/// outcomes are cached. The table is dropped when the call returns, so
/// solver instances can be reused and shared freely without one input's
/// cache bleeding into the next.
///
/// # Examples
///
/// ```
/// use ninefold_core::Grid;
/// use ninefold_solver::{BacktrackSolver, SolveError};
///
/// let solver = BacktrackSolver::new();
///
/// // An empty grid has many solutions; the solver returns the first one
/// // found by its fixed expansion order.
/// let solution = solver.solve(&Grid::new())?;
/// assert!(solution.is_solved());
///
/// // Solving is non-destructive and idempotent.
/// assert_eq!(solver.solve(&solution)?, solution);
/// # Ok::<(), SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSolver {
    step_limit: u64,
}

impl Default for BacktrackSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackSolver {
    /// Creates a solver with the default step limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Creates a solver that aborts after expanding `limit` search states.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Grid;
    /// use ninefold_solver::{BacktrackSolver, SolveError};
    ///
    /// let strict = BacktrackSolver::with_step_limit(1);
    /// let result = strict.solve(&Grid::new());
    /// assert_eq!(result, Err(SolveError::StepLimitExceeded { limit: 1 }));
    /// ```
    #[must_use]
    pub fn with_step_limit(limit: u64) -> Self {
        Self { step_limit: limit }
    }

    /// Returns the configured step limit.
    #[must_use]
    pub fn step_limit(&self) -> u64 {
        self.step_limit
    }

    /// Solves the grid, returning a completed copy.
    ///
    /// The input is left untouched on every path. If the grid is already
    /// complete and consistent it is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Inconsistent`] if the input contains a duplicate
    ///   digit in a row, column or box.
    /// - [`SolveError::Unsolvable`] if no assignment of the empty cells
    ///   satisfies the sudoku constraints.
    /// - [`SolveError::StepLimitExceeded`] if the search exceeds the
    ///   configured step limit.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        self.solve_with_stats(grid).map(|(solution, _)| solution)
    }

    /// Solves the grid, additionally reporting search statistics.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats(&self, grid: &Grid) -> Result<(Grid, SolveStats), SolveError> {
        grid.check_consistency()?;

        let mut search = Search {
            memo: HashMap::new(),
            stats: SolveStats::default(),
            step_limit: self.step_limit,
        };
        let mut work = grid.clone();
        if search.run(&mut work)? {
            Ok((work, search.stats))
        } else {
            Err(SolveError::Unsolvable)
        }
    }
}

/// State of one solve call: the memoization table lives here and nowhere
/// else, so it cannot leak across invocations.
struct Search {
    memo: HashMap<Grid, Option<Grid>>,
    stats: SolveStats,
    step_limit: u64,
}

impl Search {
    /// Depth-first search from the current state of `grid`.
    ///
    /// Returns `Ok(true)` with `grid` completed in place, or `Ok(false)`
    /// with `grid` restored to the state it was called with.
    fn run(&mut self, grid: &mut Grid) -> Result<bool, SolveError> {
        if let Some(outcome) = self.memo.get(grid) {
            self.stats.memo_hits += 1;
            return match outcome {
                Some(solution) => {
                    *grid = solution.clone();
                    Ok(true)
                }
                None => Ok(false),
            };
        }

        self.stats.steps += 1;
        if self.stats.steps > self.step_limit {
            return Err(SolveError::StepLimitExceeded {
                limit: self.step_limit,
            });
        }

        let Some(pos) = grid.first_empty() else {
            self.memo.insert(grid.clone(), Some(grid.clone()));
            return Ok(true);
        };

        let key = grid.clone();
        for digit in grid.candidates_at(pos) {
            grid.set(pos, Some(digit));
            if self.run(grid)? {
                self.memo.insert(key, Some(grid.clone()));
                return Ok(true);
            }
            grid.set(pos, None);
        }

        self.memo.insert(key, None);
        Ok(false)
    }
}
