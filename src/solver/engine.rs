//! Candidate selection and ranking

use super::SubmissionQueue;
use crate::core::{Candidate, Puzzle};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// Find every valid word for `puzzle` and rank it for submission
///
/// A word survives if it contains the center letter and uses only allowed
/// letters. Survivors are split into pangrams and plain words, each sorted
/// longest first, pangrams ahead of plain words.
///
/// An empty dictionary or a puzzle with no valid words yields an empty queue.
///
/// # Examples
/// ```
/// use spelling_bee::core::Puzzle;
/// use spelling_bee::solver::solve;
/// use spelling_bee::wordlists::{Dictionary, DictionaryConfig};
///
/// let dictionary = Dictionary::from_words(
///     ["aced", "cadet", "aide", "tea"],
///     &DictionaryConfig::default(),
/// );
/// let puzzle = Puzzle::new('a', "cdet".chars()).unwrap();
///
/// let queue = solve(&dictionary, &puzzle);
/// assert_eq!(queue.words().collect::<Vec<_>>(), ["cadet", "aced"]);
/// ```
#[must_use]
pub fn solve(dictionary: &Dictionary, puzzle: &Puzzle) -> SubmissionQueue {
    let (pangrams, plains): (Vec<Candidate>, Vec<Candidate>) = dictionary
        .words()
        .par_iter()
        .filter_map(|word| Candidate::classify(word, puzzle))
        .partition(Candidate::is_pangram);

    SubmissionQueue::from_groups(pangrams, plains)
}
