//! Dictionary for Spelling Bee solving
//!
//! A deduplicated set of lowercase words, loaded once and never modified.

pub mod loader;

use rustc_hash::FxHashSet;

pub use loader::load_dictionary;

/// Thresholds a word must meet to enter the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Minimum number of characters
    pub min_length: usize,
    /// Minimum number of distinct letters
    pub min_unique_letters: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            min_unique_letters: 4,
        }
    }
}

/// An immutable set of dictionary words
///
/// Every entry is lowercase ASCII and satisfies the `DictionaryConfig` it was built with.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and lowercased; anything that is not purely
    /// alphabetic or misses a threshold is dropped.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::wordlists::{Dictionary, DictionaryConfig};
    ///
    /// let dictionary = Dictionary::from_words(
    ///     ["Cadet", "cadet ", "tea", "aide"],
    ///     &DictionaryConfig::default(),
    /// );
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("cadet"));
    /// ```
    pub fn from_words<I, S>(words: I, config: &DictionaryConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|raw| normalize_entry(raw.as_ref(), config))
            .collect();

        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The underlying set, for parallel iteration
    pub(crate) const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }
}

/// Normalize one raw entry, returning `None` if it fails any threshold
fn normalize_entry(raw: &str, config: &DictionaryConfig) -> Option<String> {
    let word = raw.trim().to_lowercase();

    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }

    if word.len() < config.min_length {
        return None;
    }

    let unique = word.bytes().collect::<FxHashSet<u8>>().len();
    (unique >= config.min_unique_letters).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let config = DictionaryConfig::default();
        assert_eq!(config.min_length, 4);
        assert_eq!(config.min_unique_letters, 4);
    }

    #[test]
    fn from_words_deduplicates() {
        let dictionary =
            Dictionary::from_words(["cadet", "CADET", " cadet\t"], &DictionaryConfig::default());
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn from_words_applies_length_threshold() {
        let dictionary = Dictionary::from_words(["tea", "teal"], &DictionaryConfig::default());
        assert!(!dictionary.contains("tea"));
        assert!(dictionary.contains("teal"));
    }

    #[test]
    fn from_words_applies_unique_letter_threshold() {
        // "aaaa" and "abab" are long enough but have too few distinct letters
        let dictionary =
            Dictionary::from_words(["aaaa", "abab", "abcd"], &DictionaryConfig::default());
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("abcd"));
    }

    #[test]
    fn from_words_rejects_non_alphabetic() {
        let dictionary = Dictionary::from_words(
            ["can't", "well-known", "abc123", "two words", "caf\u{e9}s"],
            &DictionaryConfig::default(),
        );
        assert!(dictionary.is_empty());
    }

    #[test]
    fn from_words_custom_thresholds() {
        let config = DictionaryConfig {
            min_length: 3,
            min_unique_letters: 2,
        };
        let dictionary = Dictionary::from_words(["tea", "aaa", "aab"], &config);
        assert!(dictionary.contains("tea"));
        assert!(dictionary.contains("aab"));
        assert!(!dictionary.contains("aaa"));
    }

    #[test]
    fn empty_dictionary() {
        let input: &[&str] = &[];
        let dictionary = Dictionary::from_words(input, &DictionaryConfig::default());
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.iter().count(), 0);
    }
}
