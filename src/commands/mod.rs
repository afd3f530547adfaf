//! Command implementations

pub mod play;
pub mod solve;
pub mod submit;

pub use play::{PlayOptions, PlayReport, play_puzzle, run_play};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use submit::{SubmissionReport, run_submissions};
