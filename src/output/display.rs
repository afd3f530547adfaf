//! Display functions for command results

use super::formatters::{format_found, format_letters};
use crate::commands::PlayReport;
use crate::core::Puzzle;
use crate::solver::SubmissionQueue;
use colored::Colorize;

/// Print the puzzle and how many words were found for it
pub fn print_puzzle_summary(puzzle: &Puzzle, queue: &SubmissionQueue) {
    println!(
        "Center letter: {}",
        puzzle.center().to_ascii_uppercase().to_string().bright_yellow().bold()
    );
    println!("All letters: {}", format_letters(puzzle.allowed()));
    println!("{}", format_found(queue.len(), queue.pangram_count()));
}

/// Print the ranked queue, pangrams highlighted
pub fn print_queue(queue: &SubmissionQueue, limit: Option<usize>) {
    let shown = limit.unwrap_or(queue.len()).min(queue.len());

    println!("\n{}", "─".repeat(60).cyan());
    for (i, candidate) in queue.iter().take(shown).enumerate() {
        let word = candidate.text().to_uppercase();
        if candidate.is_pangram() {
            println!("{:4}. {} {}", i + 1, word.bright_green().bold(), "★".yellow());
        } else {
            println!("{:4}. {}", i + 1, word);
        }
    }

    if shown < queue.len() {
        println!("      … {} more", queue.len() - shown);
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a play run
pub fn print_play_report(report: &PlayReport) {
    let attempted = format!("{}/{}", report.submission.attempted, report.queued);
    println!(
        "\nTried {} words, submit pressed {} times",
        attempted.bright_yellow(),
        report.submission.clicked
    );
    println!("Final: {}", report.final_status.bright_cyan().bold());
    if report.submission.interrupted {
        println!("{}", "Stopped early: browser closed".yellow());
    }
}
