//! Board position (x, y) coordinate types.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions also address the nine 3x3 boxes: box 0 is top-left,
/// box 8 bottom-right, numbered row by row.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
///
/// // Row-major enumeration of the whole board
/// assert_eq!(Position::ALL.len(), 81);
/// assert_eq!(Position::ALL[0], Position::new(0, 0));
/// assert_eq!(Position::ALL[80], Position::new(8, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order: (0, 0), (1, 0), ..., (8, 8).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut index = 0;
        while index < 81 {
            all[index] = Self {
                x: (index % 9) as u8,
                y: (index / 9) as u8,
            };
            index += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x < 9, "Column must be between 0 and 8, got {x}");
        assert!(y < 9, "Row must be between 0 and 8, got {y}");
        Self { x, y }
    }

    /// Creates a position from a row-major cell index in the range 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "Cell index must be between 0 and 80, got {index}");
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major within the box).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// // Center cell of the center box
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// // Top-left cell of the bottom-right box
    /// assert_eq!(Position::from_box(8, 0), Position::new(6, 6));
    /// ```
    #[must_use]
    pub fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(
            box_index < 9,
            "Box index must be between 0 and 8, got {box_index}"
        );
        assert!(cell < 9, "Box cell must be between 0 and 8, got {cell}");
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
