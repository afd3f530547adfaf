//! Puzzle page session
//!
//! The run only touches the browser through two narrow traits: `PuzzlePage`
//! for reading the puzzle and wiring up progress events, and `WordSubmitter`
//! for the keystrokes of the submission loop. `ChromeSession` implements both
//! over the Chrome DevTools Protocol.

mod chrome;
mod error;
#[cfg(test)]
pub(crate) mod fake;

pub use chrome::ChromeSession;
pub use error::SessionError;

use crate::core::Puzzle;
use crate::sync::ProgressSnapshot;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Read side of the puzzle page
#[async_trait]
pub trait PuzzlePage: Send + Sync {
    /// Wait until the puzzle has rendered
    ///
    /// # Errors
    /// `SessionError::SetupTimeout` if the puzzle does not appear in time.
    async fn wait_until_ready(&self) -> Result<(), SessionError>;

    /// Raw text of the center letter and of every letter tile
    async fn read_puzzle_text(&self) -> Result<(String, Vec<String>), SessionError>;

    /// Current contents of the score panel
    async fn read_progress(&self) -> Result<ProgressSnapshot, SessionError>;

    /// Inject the score panel observer and the console bridge
    async fn install_progress_bridge(&self) -> Result<(), SessionError>;

    /// Every console line the page logs from now on
    ///
    /// The stream ends when the page closes.
    async fn console_lines(&self) -> Result<BoxStream<'static, String>, SessionError>;

    /// Read and validate the puzzle
    ///
    /// # Errors
    /// `SessionError::Puzzle` if the page text is not a well-formed puzzle.
    async fn read_puzzle(&self) -> Result<Puzzle, SessionError> {
        let (center, letters) = self.read_puzzle_text().await?;
        Ok(Puzzle::from_page_text(&center, letters.as_slice())?)
    }
}

/// Keyboard side of the puzzle page
#[async_trait]
pub trait WordSubmitter: Send + Sync {
    /// Type `word` one keystroke per character
    async fn type_word(&self, word: &str) -> Result<(), SessionError>;

    /// Whether the submit button is currently shown
    async fn submit_visible(&self) -> Result<bool, SessionError>;

    async fn click_submit(&self) -> Result<(), SessionError>;

    /// Press Backspace `count` times
    async fn erase(&self, count: usize) -> Result<(), SessionError>;
}
