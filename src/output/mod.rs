//! Terminal output formatting
//!
//! Display utilities for CLI results and the live run display.

pub mod display;
pub mod formatters;
pub mod terminal;

pub use display::{print_play_report, print_puzzle_summary, print_queue};
pub use terminal::{CursorGuard, DisplayMode, LiveDisplay};
