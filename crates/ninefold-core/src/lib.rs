//! Core data structures for the ninefold sudoku engine.
//!
//! This crate provides the board model shared by the generator and the
//! solver: type-safe digits, board positions, digit sets for candidate
//! queries, and the [`Grid`] itself with its legality and consistency rules.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Compact sets of digits, used for candidate queries
//! - [`position`]: Board position (x, y) coordinate types
//! - [`grid`]: The 9x9 board, legality checking and text/numeric formats
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // 5 is blocked for the rest of the center column
//! assert!(!grid.is_safe(Position::new(4, 7), Digit::D5));
//!
//! // Candidate queries come back as digit sets
//! let candidates = grid.candidates_at(Position::new(4, 7));
//! assert_eq!(candidates.len(), 8);
//! assert!(!candidates.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{ConsistencyError, Grid, InvalidCellValue, ParseGridError},
    position::Position,
};
