//! Live run display
//!
//! A status line sits above the word progress bar. Both are torn down, and the
//! cursor shown again, when the guards drop, however the run ends.

use crossterm::{cursor, execute};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io;

/// Whether to draw to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Terminal,
    Hidden,
}

/// Hides the terminal cursor until dropped
pub struct CursorGuard {
    _private: (),
}

impl CursorGuard {
    /// Hide the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the escape sequence.
    pub fn hide() -> io::Result<Self> {
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self { _private: () })
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
    }
}

/// Status line plus word progress bar
pub struct LiveDisplay {
    status: ProgressBar,
    words: ProgressBar,
}

impl LiveDisplay {
    /// Create the display for a queue of `total` words
    #[must_use]
    pub fn new(total: usize, mode: DisplayMode) -> Self {
        let target = match mode {
            DisplayMode::Terminal => ProgressDrawTarget::stdout(),
            DisplayMode::Hidden => ProgressDrawTarget::hidden(),
        };
        let multi = MultiProgress::with_draw_target(target);

        let status = multi.add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            status.set_style(style);
        }

        let words = multi.add(ProgressBar::new(total as u64));
        if let Ok(style) =
            ProgressStyle::with_template("Trying words {bar:40.cyan/blue} {pos}/{len} [{elapsed}<{eta}]")
        {
            words.set_style(style.progress_chars("█▓▒░"));
        }

        Self { status, words }
    }

    /// Bar the status display task redraws
    #[must_use]
    pub fn status(&self) -> ProgressBar {
        self.status.clone()
    }

    /// Bar advanced once per submitted word
    #[must_use]
    pub const fn words(&self) -> &ProgressBar {
        &self.words
    }
}

impl Drop for LiveDisplay {
    fn drop(&mut self) {
        // Word bar disappears; the last status line stays on screen
        self.words.finish_and_clear();
        self.status.finish();
    }
}
