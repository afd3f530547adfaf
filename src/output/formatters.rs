//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Format a letter set as `A, C, D, E, T`
#[must_use]
pub fn format_letters(letters: LetterSet) -> String {
    letters
        .iter()
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the one-line word count summary
#[must_use]
pub fn format_found(valid: usize, pangrams: usize) -> String {
    format!("Found {valid} valid words ({pangrams} pangrams)")
}
