//! A set of candidate digits, stored as a fixed-width bitset.
//!
//! This module provides [`DigitSet`], a `u32`-backed set of digits
//! `1..=size`. Bit `i` represents digit `i + 1`, so a single machine word
//! covers every supported board size and peer elimination becomes a bitwise
//! AND/NOT.
//!
//! # Examples
//!
//! ```
//! use cluesmith_core::DigitSet;
//!
//! let mut set = DigitSet::full(9);
//! set.remove(5);
//! set.remove(7);
//!
//! assert_eq!(set.len(), 7);
//! assert!(!set.contains(5));
//! assert!(set.contains(1));
//! ```

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// A set of digits in the range `1..=32`, represented as a `u32` bitset.
///
/// # Set Operations
///
/// ```
/// use cluesmith_core::DigitSet;
///
/// let a = DigitSet::from_iter([1, 2, 3]);
/// let b = DigitSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, DigitSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u32);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates the set of all digits `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is greater than 32.
    #[must_use]
    pub fn full(size: u8) -> Self {
        assert!(size <= 32, "digit sets support at most 32 digits, got {size}");
        if size == 32 {
            Self(u32::MAX)
        } else {
            Self((1 << size) - 1)
        }
    }

    fn bit(digit: u8) -> u32 {
        assert!(
            (1..=32).contains(&digit),
            "digit must be between 1 and 32, got {digit}"
        );
        1 << (digit - 1)
    }

    /// Inserts a digit into the set.
    pub fn insert(&mut self, digit: u8) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set. Returns `true` if it was present.
    pub fn remove(&mut self, digit: u8) -> bool {
        let bit = Self::bit(digit);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set has exactly one member.
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros < 32")]
            let digit = self.0.trailing_zeros() as u8 + 1;
            Some(digit)
        } else {
            None
        }
    }

    /// Returns the digits in `self` but not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the digits in both sets.
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        self & other
    }

    /// Returns the digits in either set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self | other
    }

    /// Iterates over the digits in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u32);

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros < 32")]
        let digit = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
