//! Spelling Bee solving
//!
//! Turns a dictionary and a puzzle into a ranked submission queue.

mod engine;
mod queue;

pub use engine::solve;
pub use queue::SubmissionQueue;
