//! Letter set representation
//!
//! A `LetterSet` stores a set of lowercase ASCII letters as a 26-bit mask, so
//! subset and membership checks against a puzzle are single bit operations.

use std::fmt;

/// A set of lowercase ASCII letters
///
/// Bit `n` is set when the letter `b'a' + n` is a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Build the set of distinct letters used by `word`
    ///
    /// Returns `None` if the word contains anything other than lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("cadet").unwrap();
    /// assert_eq!(set.len(), 5);
    /// assert!(set.contains('t'));
    ///
    /// assert!(LetterSet::from_word("Cadet").is_none());
    /// assert!(LetterSet::from_word("ca-det").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        word.bytes().try_fold(Self::EMPTY, |set, byte| {
            byte.is_ascii_lowercase()
                .then(|| Self(set.0 | Self::bit(byte)))
        })
    }

    /// Return a copy of the set with `letter` added
    ///
    /// Returns `None` if `letter` is not a lowercase ASCII letter.
    #[must_use]
    pub fn with(self, letter: char) -> Option<Self> {
        u8::try_from(letter)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .map(|byte| Self(self.0 | Self::bit(byte)))
    }

    /// Check if the set contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        u8::try_from(letter)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .is_some_and(|byte| self.0 & Self::bit(byte) != 0)
    }

    /// Check if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .filter(move |&byte| self.0 & Self::bit(byte) != 0)
            .map(char::from)
    }
}

impl FromIterator<char> for LetterSet {
    /// Collect letters into a set, silently skipping anything that is not a lowercase ASCII letter
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, letter| set.with(letter).unwrap_or(set))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
