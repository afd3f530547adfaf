//! Spelling Bee Solver
//!
//! Finds every dictionary word for a Spelling Bee puzzle, ranks pangrams and long
//! words first, and plays them into the puzzle page while mirroring its live score.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::Puzzle;
//! use spelling_bee::solver::solve;
//! use spelling_bee::wordlists::{Dictionary, DictionaryConfig};
//!
//! let dictionary = Dictionary::from_words(["cadet", "aced", "aide"], &DictionaryConfig::default());
//! let puzzle = Puzzle::new('a', "cdet".chars()).unwrap();
//!
//! let queue = solve(&dictionary, &puzzle);
//! println!("{} words, {} pangrams", queue.len(), queue.pangram_count());
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Run defaults
pub mod config;

// Browser session
pub mod page;

// Live progress bridge
pub mod sync;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
