//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// This enum provides type-safe representation of sudoku digits. There is no
/// variant for 0: an unassigned cell is modeled as `Option<Digit>` being
/// `None`, so "is this value legal here?" questions never have to special-case
/// emptiness.
///
/// # Examples
///
/// ```
/// use ninefold_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Checked construction from a u8 value
/// assert_eq!(Digit::new(7), Some(Digit::D7));
/// assert_eq!(Digit::new(0), None);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[8], Digit::D9);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::new(3), Some(Digit::D3));
    /// assert_eq!(Digit::new(0), None);
    /// assert_eq!(Digit::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use [`Digit::new`] for
    /// fallible conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// let digit = Digit::from_value(5);
    /// assert_eq!(digit, Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use ninefold_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::new(value) {
            Some(digit) => digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D9.value(), 9);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_round_trip() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
            assert_eq!(Digit::new(digit.value()), Some(digit));
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(u8::from(digit), digit.value());
            assert_eq!(digit.to_string(), digit.value().to_string());
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(u8::MAX), None);
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(Digit::D1 < Digit::D2);
        assert!(Digit::D8 < Digit::D9);
        let mut sorted = Digit::ALL;
        sorted.sort_unstable();
        assert_eq!(sorted, Digit::ALL);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
