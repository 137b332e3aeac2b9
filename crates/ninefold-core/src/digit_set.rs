//! A set of sudoku digits, backed by a 9-bit mask.

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// A set of [`Digit`]s represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing compact storage and fast set operations. This
/// is the shape candidate queries come back in: "which digits can still go in
/// this cell?".
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// // Start from all candidates and strike some out
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// # Set Operations
///
/// ```
/// use ninefold_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const ALL_BITS: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(ALL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::mask(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::mask(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.0 & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the only digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Digit, DigitSet};
    ///
    /// let single = DigitSet::from_iter([Digit::D4]);
    /// assert_eq!(single.as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(&self) -> Option<Digit> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterates over the digits in the set in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }

    const fn mask(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|d| d.value())).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & ALL_BITS)
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Digit::new(index as u8 + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);

        // removing an absent digit is a no-op
        set.remove(Digit::D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let set = DigitSet::from_iter([Digit::D1, Digit::D5, Digit::D9]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D5));
        assert!(set.contains(Digit::D9));
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5, Digit::D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    #[test]
    fn test_complement() {
        let low = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]);
        let high = !low;
        assert_eq!(high.len(), 5);
        assert!(high.contains(Digit::D5));
        assert!(high.contains(Digit::D9));
        assert!(!high.contains(Digit::D1));
        assert_eq!(!DigitSet::FULL, DigitSet::EMPTY);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        let single = DigitSet::from_iter([Digit::D7]);
        assert_eq!(single.as_single(), Some(Digit::D7));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_debug_lists_values() {
        let set = DigitSet::from_iter([Digit::D2, Digit::D8]);
        assert_eq!(format!("{set:?}"), "{2, 8}");
    }
}
