//! Difficulty levels for generated puzzles.

use std::fmt::{self, Display};

/// Puzzle difficulty, expressed as the number of cells removed from a
/// complete solution.
///
/// The six levels remove 29, 38, 47, 56, 65 and 74 cells respectively,
/// leaving between 52 and 7 given cells. Removal is purely random, so the
/// count is a coarse difficulty knob rather than a guarantee; in particular,
/// the higher levels usually admit more than one solution.
///
/// # Examples
///
/// ```
/// use ninefold_generator::Level;
///
/// assert_eq!(Level::Easy.removals(), 29);
/// assert_eq!(Level::Inhuman.removals(), 74);
/// assert_eq!(Level::VeryHard.to_string(), "Very hard");
///
/// for level in Level::ALL {
///     assert!(level.removals() <= 81);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// 29 cells removed.
    Easy,
    /// 38 cells removed.
    Medium,
    /// 47 cells removed.
    Hard,
    /// 56 cells removed.
    VeryHard,
    /// 65 cells removed.
    Insane,
    /// 74 cells removed.
    Inhuman,
}

impl Level {
    /// All levels in ascending order of difficulty.
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
        Self::Insane,
        Self::Inhuman,
    ];

    /// Returns the number of cells removed from a complete solution at this
    /// level.
    #[must_use]
    pub const fn removals(self) -> u8 {
        match self {
            Self::Easy => 29,
            Self::Medium => 38,
            Self::Hard => 47,
            Self::VeryHard => 56,
            Self::Insane => 65,
            Self::Inhuman => 74,
        }
    }

    /// Returns the number of cells left filled at this level.
    #[must_use]
    pub const fn givens(self) -> u8 {
        81 - self.removals()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very hard",
            Self::Insane => "Insane",
            Self::Inhuman => "Inhuman",
        };
        f.write_str(label)
    }
}
