use crate::core::PuzzleError;
use chromiumoxide::error::CdpError;
use std::time::Duration;
use thiserror::Error;

/// Errors from driving the puzzle page
#[derive(Debug, Error)]
pub enum SessionError {
    /// The browser or page went away, usually because the user closed it
    #[error("browser session closed")]
    Closed,

    #[error("timed out after {waited:?} waiting for {selector}")]
    SetupTimeout { selector: String, waited: Duration },

    #[error("no element matches {0}")]
    MissingElement(String),

    #[error("invalid puzzle on page: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("script error: {0}")]
    Script(String),

    #[error(transparent)]
    Cdp(#[from] CdpError),
}

impl SessionError {
    /// Whether this error means the session ended rather than failed
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
