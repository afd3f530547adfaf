//! Progress snapshot
//!
//! The three fields of the page's score panel.

use serde::{Deserialize, Serialize};

/// Current rank, points to the next rank, and the next rank's name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub current_title: String,
    pub next_left: String,
    pub next_title: String,
}

impl ProgressSnapshot {
    pub fn new(
        current_title: impl Into<String>,
        next_left: impl Into<String>,
        next_title: impl Into<String>,
    ) -> Self {
        Self {
            current_title: current_title.into(),
            next_left: next_left.into(),
            next_title: next_title.into(),
        }
    }
}
