//! The 9x9 sudoku board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 sudoku board.
///
/// Each of the 81 cells holds `Option<Digit>`: `Some` for a placed digit,
/// `None` for an unassigned cell. The board itself never rejects placements;
/// construction and solving deliberately pass through states that still
/// contain empty cells. Legality questions are answered by
/// [`is_safe`](Grid::is_safe), [`candidates_at`](Grid::candidates_at) and
/// [`check_consistency`](Grid::check_consistency).
///
/// Equality and hashing are structural over the exact cell contents, so a
/// `Grid` can serve directly as a lookup key for "have I seen this exact
/// configuration before?" tables.
///
/// # Text format
///
/// [`Display`] prints nine rows with `_` for empty cells and a blank column
/// between box triples. [`FromStr`] accepts digits `1`-`9`, any of `.`, `_`
/// or `0` for an empty cell, and ignores all whitespace:
///
/// ```
/// use ninefold_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.filled_count(), 30);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// // 5 is now blocked for the rest of row 0, column 0 and the top-left box
/// assert!(!grid.is_safe(Position::new(8, 0), Digit::D5));
/// assert!(!grid.is_safe(Position::new(0, 8), Digit::D5));
/// assert!(!grid.is_safe(Position::new(1, 1), Digit::D5));
/// assert!(grid.is_safe(Position::new(4, 4), Digit::D5));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell content at a position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell content at a position. `None` clears the cell.
    pub const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.index()] = cell;
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    ///
    /// grid.set(Position::new(0, 0), Some(Digit::D1));
    /// assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    /// ```
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| self[*pos].is_none())
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// Returns `true` if placing `digit` at `pos` would not collide with any
    /// other cell in the same row, column or box.
    ///
    /// The content of `pos` itself is ignored, so the answer does not change
    /// when the target cell already holds a digit. This is a pure query with
    /// no side effects; it reads at most 27 cells.
    #[must_use]
    pub fn is_safe(&self, pos: Position, digit: Digit) -> bool {
        for x in 0..9 {
            let other = Position::new(x, pos.y());
            if other != pos && self[other] == Some(digit) {
                return false;
            }
        }
        for y in 0..9 {
            let other = Position::new(pos.x(), y);
            if other != pos && self[other] == Some(digit) {
                return false;
            }
        }
        for cell in 0..9 {
            let other = Position::from_box(pos.box_index(), cell);
            if other != pos && self[other] == Some(digit) {
                return false;
            }
        }
        true
    }

    /// Returns the set of digits that can be placed at `pos` without
    /// colliding with another cell.
    ///
    /// Agrees with [`is_safe`] digit by digit: `candidates_at(pos)` contains
    /// exactly the digits for which `is_safe(pos, digit)` is `true`.
    ///
    /// [`is_safe`]: Grid::is_safe
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut seen = DigitSet::new();
        for x in 0..9 {
            let other = Position::new(x, pos.y());
            if other != pos && let Some(digit) = self[other] {
                seen.insert(digit);
            }
        }
        for y in 0..9 {
            let other = Position::new(pos.x(), y);
            if other != pos && let Some(digit) = self[other] {
                seen.insert(digit);
            }
        }
        for cell in 0..9 {
            let other = Position::from_box(pos.box_index(), cell);
            if other != pos && let Some(digit) = self[other] {
                seen.insert(digit);
            }
        }
        !seen
    }

    /// Checks that no digit appears twice in any row, column or box.
    ///
    /// Empty cells are allowed; this validates only the placed digits. The
    /// error names the first offending house and digit found, scanning rows,
    /// then columns, then boxes.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if a duplicate digit is found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for y in 0..9 {
            let mut seen = DigitSet::new();
            for x in 0..9 {
                if let Some(digit) = self[Position::new(x, y)] {
                    if seen.contains(digit) {
                        return Err(ConsistencyError::DuplicateInRow { y, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        for x in 0..9 {
            let mut seen = DigitSet::new();
            for y in 0..9 {
                if let Some(digit) = self[Position::new(x, y)] {
                    if seen.contains(digit) {
                        return Err(ConsistencyError::DuplicateInColumn { x, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        for box_index in 0..9 {
            let mut seen = DigitSet::new();
            for cell in 0..9 {
                if let Some(digit) = self[Position::from_box(box_index, cell)] {
                    if seen.contains(digit) {
                        return Err(ConsistencyError::DuplicateInBox { box_index, digit });
                    }
                    seen.insert(digit);
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if no digit appears twice in any row, column or box.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    /// Returns `true` if the grid is complete and consistent.
    ///
    /// Every house of a complete consistent grid holds each digit exactly
    /// once, so this is the full "solved sudoku" condition.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }

    /// Returns the grid as a row-major array of numeric values, with 0 for
    /// empty cells.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[pos.y() as usize][pos.x() as usize] = self[pos].map_or(0, |digit| digit.value());
        }
        values
    }

    /// Builds a grid from a row-major array of numeric values, with 0 for
    /// empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Grid;
    ///
    /// let mut values = [[0; 9]; 9];
    /// values[2][7] = 4;
    /// let grid = Grid::try_from_values(values)?;
    /// assert_eq!(grid.filled_count(), 1);
    /// assert_eq!(grid.to_values(), values);
    /// # Ok::<(), ninefold_core::InvalidCellValue>(())
    /// ```
    pub fn try_from_values(values: [[u8; 9]; 9]) -> Result<Self, InvalidCellValue> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = values[pos.y() as usize][pos.x() as usize];
            if value == 0 {
                continue;
            }
            let Some(digit) = Digit::new(value) else {
                return Err(InvalidCellValue {
                    x: pos.x(),
                    y: pos.y(),
                    value,
                });
            };
            grid.set(pos, Some(digit));
        }
        Ok(grid)
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    f.write_str(" ")?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("_")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Grid(\"")?;
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("_")?,
            }
        }
        f.write_str("\")")
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '_' | '.' | '0' => None,
                '1'..='9' => Some(Digit::from_value(c as u8 - b'0')),
                _ => return Err(ParseGridError::UnexpectedCharacter { character: c }),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

/// A duplicate digit within a row, column or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// The digit appears more than once in row `y`.
    #[display("digit {digit} appears more than once in row {y}")]
    DuplicateInRow {
        /// Row (0-8) containing the duplicate.
        y: u8,
        /// The duplicated digit.
        digit: Digit,
    },
    /// The digit appears more than once in column `x`.
    #[display("digit {digit} appears more than once in column {x}")]
    DuplicateInColumn {
        /// Column (0-8) containing the duplicate.
        x: u8,
        /// The duplicated digit.
        digit: Digit,
    },
    /// The digit appears more than once in a 3x3 box.
    #[display("digit {digit} appears more than once in box {box_index}")]
    DuplicateInBox {
        /// Box index (0-8) containing the duplicate.
        box_index: u8,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// An error produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains a character that is neither a digit, an empty-cell
    /// marker (`_`, `.`, `0`) nor whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

/// A cell value outside the range 0-9 in a numeric grid array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value} at ({x}, {y})")]
pub struct InvalidCellValue {
    /// Column (0-8) of the offending cell.
    pub x: u8,
    /// Row (0-8) of the offending cell.
    pub y: u8,
    /// The value that is not a digit.
    pub value: u8,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn puzzle() -> Grid {
        PUZZLE.parse().unwrap()
    }

    fn solution() -> Grid {
        SOLUTION.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let grid = puzzle();
        assert_eq!(grid.filled_count(), 30);
        assert_eq!(grid.empty_count(), 51);

        let text = grid.to_string();
        assert_eq!(
            text.lines().next(),
            Some("53_ _7_ ___"),
            "display starts with the first row"
        );
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots = ".".repeat(81).parse::<Grid>().unwrap();
        let zeros = "0".repeat(81).parse::<Grid>().unwrap();
        let underscores = "_".repeat(81).parse::<Grid>().unwrap();
        assert_eq!(dots, Grid::new());
        assert_eq!(zeros, Grid::new());
        assert_eq!(underscores, Grid::new());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::UnexpectedCharacter { character: 'x' })
        );
        assert_eq!(
            "_".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            "_".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_cell_set_and_index() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 2);
        assert_eq!(grid.cell(pos), None);

        grid.set(pos, Some(Digit::D8));
        assert_eq!(grid.cell(pos), Some(Digit::D8));
        assert_eq!(grid[pos], Some(Digit::D8));

        grid.set(pos, None);
        assert_eq!(grid.cell(pos), None);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = solution();
        assert_eq!(grid.first_empty(), None);
        assert!(grid.is_complete());

        grid.set(Position::new(5, 3), None);
        grid.set(Position::new(2, 1), None);
        assert_eq!(grid.first_empty(), Some(Position::new(2, 1)));
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_is_safe_detects_conflicts() {
        let grid = puzzle();

        // (2, 0) is empty; row 0 holds 5, 3, 7
        let pos = Position::new(2, 0);
        assert!(!grid.is_safe(pos, Digit::D5));
        assert!(!grid.is_safe(pos, Digit::D3));
        assert!(!grid.is_safe(pos, Digit::D7));
        // column 2 holds 8 (row 2)
        assert!(!grid.is_safe(pos, Digit::D8));
        // box 0 holds 5, 3, 6, 9, 8
        assert!(!grid.is_safe(pos, Digit::D6));
        assert!(!grid.is_safe(pos, Digit::D9));
        // 1 and 4 collide with nothing visible from (2, 0)
        assert!(grid.is_safe(pos, Digit::D1));
        assert!(grid.is_safe(pos, Digit::D4));
    }

    #[test]
    fn test_is_safe_ignores_own_cell() {
        let grid = solution();
        for pos in Position::ALL {
            let digit = grid.cell(pos).unwrap();
            assert!(
                grid.is_safe(pos, digit),
                "cell {pos} should accept its own digit {digit}"
            );
        }
    }

    #[test]
    fn test_candidates_at_matches_is_safe() {
        let grid = puzzle();
        for pos in Position::ALL {
            let candidates = grid.candidates_at(pos);
            for digit in Digit::ALL {
                assert_eq!(
                    candidates.contains(digit),
                    grid.is_safe(pos, digit),
                    "disagreement at {pos} for digit {digit}"
                );
            }
        }
    }

    #[test]
    fn test_check_consistency_reports_house() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 4), Some(Digit::D6));
        grid.set(Position::new(7, 4), Some(Digit::D6));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateInRow {
                y: 4,
                digit: Digit::D6
            })
        );

        let mut grid = Grid::new();
        grid.set(Position::new(3, 0), Some(Digit::D2));
        grid.set(Position::new(3, 8), Some(Digit::D2));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateInColumn {
                x: 3,
                digit: Digit::D2
            })
        );

        // same box, different row and column
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D9));
        grid.set(Position::new(1, 1), Some(Digit::D9));
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::DuplicateInBox {
                box_index: 0,
                digit: Digit::D9
            })
        );
    }

    #[test]
    fn test_consistency_of_fixtures() {
        assert!(puzzle().is_consistent());
        assert!(solution().is_consistent());
        assert!(Grid::new().is_consistent());
    }

    #[test]
    fn test_is_solved() {
        assert!(solution().is_solved());
        assert!(!puzzle().is_solved());
        assert!(!Grid::new().is_solved());

        // complete but inconsistent: copy a digit over its row neighbor
        let mut broken = solution();
        let copied = broken.cell(Position::new(1, 0));
        broken.set(Position::new(0, 0), copied);
        assert!(broken.is_complete());
        assert!(!broken.is_solved());
    }

    #[test]
    fn test_values_round_trip() {
        let grid = puzzle();
        let values = grid.to_values();
        assert_eq!(values[0][0], 5);
        assert_eq!(values[0][2], 0);
        assert_eq!(Grid::try_from_values(values).unwrap(), grid);
    }

    #[test]
    fn test_try_from_values_rejects_out_of_range() {
        let mut values = [[0; 9]; 9];
        values[6][2] = 10;
        assert_eq!(
            Grid::try_from_values(values),
            Err(InvalidCellValue {
                x: 2,
                y: 6,
                value: 10
            })
        );
    }

    #[test]
    fn test_debug_is_compact() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        let debug = format!("{grid:?}");
        assert!(debug.starts_with("Grid(\"5"));
        assert_eq!(debug.len(), "Grid(\"\")".len() + 81);
    }

    proptest! {
        #[test]
        fn is_safe_matches_peer_scan(
            cells in proptest::collection::vec(0u8..=9, 81),
            index in 0usize..81,
            value in 1u8..=9,
        ) {
            let mut grid = Grid::new();
            for (i, &v) in cells.iter().enumerate() {
                grid.set(Position::from_index(i), Digit::new(v));
            }
            let pos = Position::from_index(index);
            let digit = Digit::from_value(value);

            let conflict = Position::ALL.into_iter().any(|other| {
                other != pos
                    && (other.y() == pos.y()
                        || other.x() == pos.x()
                        || other.box_index() == pos.box_index())
                    && grid.cell(other) == Some(digit)
            });

            prop_assert_eq!(grid.is_safe(pos, digit), !conflict);
            prop_assert_eq!(grid.candidates_at(pos).contains(digit), !conflict);
        }
    }
}
