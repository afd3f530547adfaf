//! Submission queue
//!
//! The ranked, fully pre-computed list of words to attempt.

use crate::core::Candidate;
use std::cmp::Reverse;

/// Ordered sequence of candidates to submit
///
/// All pangrams come first, then all plain words; each group is sorted longest
/// first. Order among equal-length words is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionQueue {
    entries: Vec<Candidate>,
    pangram_count: usize,
}

impl SubmissionQueue {
    /// Rank pangrams and plain words into a queue
    #[must_use]
    pub fn from_groups(mut pangrams: Vec<Candidate>, mut plains: Vec<Candidate>) -> Self {
        debug_assert!(pangrams.iter().all(Candidate::is_pangram));
        debug_assert!(!plains.iter().any(Candidate::is_pangram));

        pangrams.sort_by_key(|c| Reverse(c.len()));
        plains.sort_by_key(|c| Reverse(c.len()));

        let pangram_count = pangrams.len();
        pangrams.append(&mut plains);

        Self {
            entries: pangrams,
            pangram_count,
        }
    }

    /// Total number of valid words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn pangram_count(&self) -> usize {
        self.pangram_count
    }

    /// The pangram prefix of the queue
    #[must_use]
    pub fn pangrams(&self) -> &[Candidate] {
        &self.entries[..self.pangram_count]
    }

    /// The plain-word suffix of the queue
    #[must_use]
    pub fn plains(&self) -> &[Candidate] {
        &self.entries[self.pangram_count..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }

    /// Words in submission order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Candidate::text)
    }
}

impl<'a> IntoIterator for &'a SubmissionQueue {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for SubmissionQueue {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;

    fn candidates(words: &[&str]) -> Vec<Candidate> {
        let puzzle = Puzzle::new('a', "cdet".chars()).unwrap();
        words
            .iter()
            .map(|w| Candidate::classify(w, &puzzle).unwrap())
            .collect()
    }

    #[test]
    fn pangrams_precede_plains() {
        let queue = SubmissionQueue::from_groups(
            candidates(&["cadet"]),
            candidates(&["accede", "aced"]),
        );

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pangram_count(), 1);
        assert_eq!(queue.pangrams()[0].text(), "cadet");
        // "accede" is longer than the pangram but still comes after it
        assert_eq!(queue.words().collect::<Vec<_>>(), ["cadet", "accede", "aced"]);
    }

    #[test]
    fn groups_sorted_longest_first() {
        let queue = SubmissionQueue::from_groups(
            candidates(&["cadet", "detacted"]),
            candidates(&["aced", "accede", "dace", "decade"]),
        );

        let pangram_lengths: Vec<usize> = queue.pangrams().iter().map(Candidate::len).collect();
        assert_eq!(pangram_lengths, [8, 5]);

        let plain_lengths: Vec<usize> = queue.plains().iter().map(Candidate::len).collect();
        assert_eq!(plain_lengths, [6, 6, 4, 4]);
    }

    #[test]
    fn empty_queue() {
        let queue = SubmissionQueue::from_groups(Vec::new(), Vec::new());
        assert!(queue.is_empty());
        assert_eq!(queue.pangram_count(), 0);
        assert!(queue.pangrams().is_empty());
        assert!(queue.plains().is_empty());
    }

    #[test]
    fn owned_iteration_preserves_order() {
        let queue = SubmissionQueue::from_groups(candidates(&["cadet"]), candidates(&["aced"]));
        let words: Vec<String> = queue.into_iter().map(|c| c.text().to_string()).collect();
        assert_eq!(words, ["cadet", "aced"]);
    }
}
