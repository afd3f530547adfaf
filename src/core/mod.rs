//! Core domain types for Spelling Bee
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod candidate;
mod letters;
mod puzzle;

pub use candidate::{Candidate, CandidateKind};
pub use letters::LetterSet;
pub use puzzle::{Puzzle, PuzzleError};
