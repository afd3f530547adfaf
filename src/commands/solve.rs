//! Offline solve command
//!
//! Solves a puzzle given on the command line, without opening a browser.

use crate::core::{Puzzle, PuzzleError};
use crate::solver::{SubmissionQueue, solve};
use crate::wordlists::Dictionary;

/// Configuration for solving a puzzle offline
pub struct SolveConfig {
    pub center: String,
    /// Surrounding letters as one string, e.g. `"cdet"`
    pub letters: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(center: String, letters: String) -> Self {
        Self { center, letters }
    }
}

/// Result of solving a puzzle offline
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub queue: SubmissionQueue,
}

/// Validate the puzzle and rank every dictionary word for it
///
/// # Errors
///
/// Returns `PuzzleError` if the center is not a single letter or the letters
/// contain anything other than letters.
pub fn solve_puzzle(config: &SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, PuzzleError> {
    let letters: Vec<String> = config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(String::from)
        .collect();

    let puzzle = Puzzle::from_page_text(&config.center, &letters)?;
    let queue = solve(dictionary, &puzzle);

    Ok(SolveResult { puzzle, queue })
}
