//! Candidate words for a puzzle
//!
//! A Candidate is a dictionary word that is a valid guess, classified as either a
//! pangram (uses every allowed letter) or a plain word.

use super::{LetterSet, Puzzle};
use std::fmt;

/// How a valid guess scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Uses every allowed letter at least once
    Pangram,
    /// Valid, but misses at least one allowed letter
    Plain,
}

/// A valid guess for a specific puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    word: String,
    kind: CandidateKind,
}

impl Candidate {
    /// Classify `word` against `puzzle`
    ///
    /// Returns `None` unless the word contains the center letter and uses only
    /// allowed letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{Candidate, CandidateKind, Puzzle};
    ///
    /// let puzzle = Puzzle::new('a', "cdet".chars()).unwrap();
    ///
    /// let cadet = Candidate::classify("cadet", &puzzle).unwrap();
    /// assert_eq!(cadet.kind(), CandidateKind::Pangram);
    ///
    /// assert!(Candidate::classify("aide", &puzzle).is_none());
    /// assert!(Candidate::classify("dete", &puzzle).is_none());
    /// ```
    #[must_use]
    pub fn classify(word: &str, puzzle: &Puzzle) -> Option<Self> {
        let letters = LetterSet::from_word(word)?;
        let allowed = puzzle.allowed();

        if !letters.contains(puzzle.center()) || !letters.is_subset_of(allowed) {
            return None;
        }

        let kind = if letters == allowed {
            CandidateKind::Pangram
        } else {
            CandidateKind::Plain
        };

        Some(Self {
            word: word.to_string(),
            kind,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CandidateKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_pangram(&self) -> bool {
        self.kind == CandidateKind::Pangram
    }

    /// Length in characters, which is also the number of keystrokes needed to type it
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
