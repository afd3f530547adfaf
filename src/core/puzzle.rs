//! Spelling Bee puzzle definition
//!
//! A Puzzle is a required center letter plus the full set of letters a word may use.

use super::LetterSet;
use std::fmt;

/// A validated Spelling Bee puzzle
///
/// `allowed` always contains `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    center: char,
    allowed: LetterSet,
}

/// Error type for malformed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    EmptyCenter,
    NotASingleLetter(String),
    NoLetters,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCenter => write!(f, "Center letter is empty"),
            Self::NotASingleLetter(text) => {
                write!(f, "Expected a single letter, got {text:?}")
            }
            Self::NoLetters => write!(f, "Puzzle has no allowed letters"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Lowercase a single ASCII letter
fn ascii_letter(letter: char) -> Result<char, PuzzleError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_lowercase())
    } else {
        Err(PuzzleError::NotASingleLetter(letter.to_string()))
    }
}

/// Normalize scraped text to a single lowercase ASCII letter
fn single_letter(text: &str) -> Result<char, PuzzleError> {
    let normalized = text.trim().to_lowercase();
    let mut chars = normalized.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_lowercase() => Ok(letter),
        _ => Err(PuzzleError::NotASingleLetter(text.to_string())),
    }
}

impl Puzzle {
    /// Create a puzzle from a center letter and the surrounding letters
    ///
    /// The center is added to the allowed set whether or not `letters` repeats it.
    ///
    /// # Errors
    /// Returns `PuzzleError::NotASingleLetter` if the center or any letter is not
    /// a single ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new('a', "cdet".chars()).unwrap();
    /// assert_eq!(puzzle.center(), 'a');
    /// assert_eq!(puzzle.allowed().to_string(), "acdet");
    ///
    /// assert!(Puzzle::new('1', "cdet".chars()).is_err());
    /// ```
    pub fn new(center: char, letters: impl IntoIterator<Item = char>) -> Result<Self, PuzzleError> {
        let center = ascii_letter(center)?;
        let allowed = letters
            .into_iter()
            .map(ascii_letter)
            .collect::<Result<LetterSet, _>>()?;

        Ok(Self {
            center,
            allowed: allowed.union(LetterSet::EMPTY.with(center).unwrap_or_default()),
        })
    }

    /// Build a puzzle from raw text read off the page
    ///
    /// Each element is trimmed and lowercased. The letter list may or may not
    /// include the center.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the center is empty, no letters were found, or any
    /// element holds something other than a single letter.
    pub fn from_page_text<S: AsRef<str>>(center: &str, letters: &[S]) -> Result<Self, PuzzleError> {
        if center.trim().is_empty() {
            return Err(PuzzleError::EmptyCenter);
        }
        if letters.is_empty() {
            return Err(PuzzleError::NoLetters);
        }

        let center = single_letter(center)?;
        let letters = letters
            .iter()
            .map(|text| single_letter(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(center, letters)
    }

    /// The letter every valid word must contain
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// Every letter a valid word may use, center included
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.allowed
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.center, self.allowed)
    }
}
