//! Scripted in-memory page for tests

use super::{PuzzlePage, SessionError, WordSubmitter};
use crate::sync::ProgressSnapshot;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Mutex;

/// Something the submission loop did to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type(String),
    Click,
    Erase(usize),
}

pub struct FakePage {
    pub center: String,
    pub letters: Vec<String>,
    pub progress: Option<ProgressSnapshot>,
    pub console: Vec<String>,
    /// Whether the submit button shows, per typed word; missing entries mean visible
    pub submit_shown: Vec<bool>,
    /// Close the session when this many words have been typed
    pub close_after: Option<usize>,
    pub click_fails: bool,
    pub ready: bool,
    actions: Mutex<Vec<Action>>,
}

impl FakePage {
    pub fn new(center: &str, letters: &str) -> Self {
        Self {
            center: center.to_string(),
            letters: letters.chars().map(String::from).collect(),
            progress: Some(ProgressSnapshot::new("Beginner", "2", "Good Start")),
            console: Vec::new(),
            submit_shown: Vec::new(),
            close_after: None,
            click_fails: false,
            ready: true,
            actions: Mutex::new(Vec::new()),
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    pub fn typed(&self) -> Vec<String> {
        self.actions()
            .into_iter()
            .filter_map(|action| match action {
                Action::Type(word) => Some(word),
                _ => None,
            })
            .collect()
    }

    fn typed_count(&self) -> usize {
        self.actions
            .lock()
            .unwrap()
            .iter()
            .filter(|action| matches!(action, Action::Type(_)))
            .count()
    }

    fn record(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }
}

#[async_trait]
impl PuzzlePage for FakePage {
    async fn wait_until_ready(&self) -> Result<(), SessionError> {
        if self.ready {
            Ok(())
        } else {
            Err(SessionError::SetupTimeout {
                selector: "#hexGrid".into(),
                waited: std::time::Duration::ZERO,
            })
        }
    }

    async fn read_puzzle_text(&self) -> Result<(String, Vec<String>), SessionError> {
        Ok((self.center.clone(), self.letters.clone()))
    }

    async fn read_progress(&self) -> Result<ProgressSnapshot, SessionError> {
        self.progress
            .clone()
            .ok_or_else(|| SessionError::MissingElement(".current-title".into()))
    }

    async fn install_progress_bridge(&self) -> Result<(), SessionError> {
        Ok(())
    }

    async fn console_lines(&self) -> Result<BoxStream<'static, String>, SessionError> {
        Ok(stream::iter(self.console.clone()).boxed())
    }
}

#[async_trait]
impl WordSubmitter for FakePage {
    async fn type_word(&self, word: &str) -> Result<(), SessionError> {
        if self.close_after.is_some_and(|limit| self.typed_count() >= limit) {
            return Err(SessionError::Closed);
        }
        self.record(Action::Type(word.to_string()));
        // Let background tasks see the console
        tokio::task::yield_now().await;
        Ok(())
    }

    async fn submit_visible(&self) -> Result<bool, SessionError> {
        let index = self.typed_count().saturating_sub(1);
        Ok(self.submit_shown.get(index).copied().unwrap_or(true))
    }

    async fn click_submit(&self) -> Result<(), SessionError> {
        if self.click_fails {
            return Err(SessionError::MissingElement("#submit_button".into()));
        }
        self.record(Action::Click);
        Ok(())
    }

    async fn erase(&self, count: usize) -> Result<(), SessionError> {
        self.record(Action::Erase(count));
        Ok(())
    }
}
