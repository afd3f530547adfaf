//! Play command
//!
//! Reads the puzzle off the page, solves it, and submits every word while the
//! page's own score panel is mirrored in the terminal.

use super::submit::{SubmissionReport, run_submissions};
use crate::config::RunConfig;
use crate::core::Puzzle;
use crate::output::{CursorGuard, DisplayMode, LiveDisplay, print_puzzle_summary};
use crate::page::{ChromeSession, PuzzlePage, SessionError, WordSubmitter};
use crate::solver::solve;
use crate::sync::{
    ProgressSnapshot, format_status_line, progress_channel, spawn_progress_listener,
    spawn_status_display,
};
use crate::wordlists::{Dictionary, load_dictionary};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// How the run behaves once the puzzle is solved
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Delay between words
    pub pace: Duration,
    pub mode: DisplayMode,
    /// Wait for Enter before returning
    pub keep_open: bool,
}

/// Result of a play run
#[derive(Debug, Clone)]
pub struct PlayReport {
    pub puzzle: Puzzle,
    pub queued: usize,
    pub pangrams: usize,
    pub submission: SubmissionReport,
    /// Last status line shown
    pub final_status: String,
}

/// Solve and play the puzzle on an already open page
///
/// Progress updates are wired up before the first word is typed. The live
/// display and hidden cursor are restored however submission ends.
///
/// # Errors
///
/// Returns `SessionError` if the puzzle never renders or is malformed, the
/// session closes before submission starts, or typing fails unexpectedly.
pub async fn play_puzzle<P>(
    page: &P,
    dictionary: &Dictionary,
    options: PlayOptions,
) -> Result<PlayReport, SessionError>
where
    P: PuzzlePage + WordSubmitter,
{
    page.wait_until_ready().await?;
    let puzzle = page.read_puzzle().await?;
    let queue = solve(dictionary, &puzzle);
    info!(
        %puzzle,
        valid = queue.len(),
        pangrams = queue.pangram_count(),
        "puzzle solved"
    );

    page.install_progress_bridge().await?;
    let initial = match page.read_progress().await {
        Ok(snapshot) => snapshot,
        Err(SessionError::MissingElement(selector)) => {
            warn!(%selector, "score panel incomplete; starting from a blank status");
            ProgressSnapshot::default()
        }
        Err(err) => return Err(err),
    };

    let (publisher, receiver) = progress_channel(initial);
    let listener = spawn_progress_listener(page.console_lines().await?, publisher);

    print_puzzle_summary(&puzzle, &queue);

    let outcome = {
        let _cursor = match options.mode {
            DisplayMode::Terminal => CursorGuard::hide().ok(),
            DisplayMode::Hidden => None,
        };
        let display = LiveDisplay::new(queue.len(), options.mode);
        let status = spawn_status_display(receiver.clone(), display.status());

        let outcome = run_submissions(&queue, page, options.pace, display.words()).await;
        status.abort();
        outcome
    };

    if options.keep_open && outcome.as_ref().is_ok_and(|report| !report.interrupted) {
        wait_for_enter().await;
    }
    listener.abort();

    let submission = outcome?;
    let final_status = format_status_line(&receiver.borrow());

    Ok(PlayReport {
        puzzle,
        queued: queue.len(),
        pangrams: queue.pangram_count(),
        submission,
        final_status,
    })
}

/// Block until the user presses Enter
async fn wait_for_enter() {
    println!("\nPress Enter to close the browser...");
    let read = tokio::task::spawn_blocking(|| {
        let mut input = String::new();
        io::stdin().read_line(&mut input).map(|_| ())
    });
    if let Ok(Err(err)) = read.await {
        warn!(error = %err, "failed to read from stdin");
    }
}

/// Load the dictionary, launch the browser, and play one puzzle
///
/// The browser is closed afterwards whether or not the run succeeded.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be read, the browser cannot be
/// launched, or the run fails. A session closed by the user surfaces as
/// `SessionError::Closed`.
pub async fn run_play(dictionary_path: &Path, config: &RunConfig) -> Result<PlayReport> {
    let dictionary = load_dictionary(dictionary_path, &config.dictionary).with_context(|| {
        format!("failed to load dictionary '{}'", dictionary_path.display())
    })?;
    info!(words = dictionary.len(), path = %dictionary_path.display(), "dictionary loaded");

    let session = ChromeSession::launch(config).await?;

    let options = PlayOptions {
        pace: config.pace,
        mode: DisplayMode::Terminal,
        keep_open: config.keep_open,
    };
    let result = play_puzzle(&session, &dictionary, options).await;

    if let Err(err) = session.close().await {
        warn!(error = %err, "failed to close browser");
    }

    Ok(result?)
}
