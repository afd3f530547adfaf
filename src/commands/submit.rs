//! Word submission loop
//!
//! Types each queued word, presses submit when it shows, then erases what was
//! typed so the next word starts from an empty input.

use crate::core::Candidate;
use crate::page::{SessionError, WordSubmitter};
use crate::solver::SubmissionQueue;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of running the submission loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Words typed and erased
    pub attempted: usize,
    /// Times the submit button was pressed
    pub clicked: usize,
    /// The browser closed before the queue ran out
    pub interrupted: bool,
}

/// Submit every word in `queue`, in order
///
/// The loop never checks whether a word was accepted and never retries. A closed
/// session ends the loop normally with `interrupted` set.
///
/// # Errors
///
/// Returns any session error other than `SessionError::Closed` raised while
/// typing or erasing.
pub async fn run_submissions<S>(
    queue: &SubmissionQueue,
    submitter: &S,
    pace: Duration,
    progress: &ProgressBar,
) -> Result<SubmissionReport, SessionError>
where
    S: WordSubmitter + ?Sized,
{
    let mut report = SubmissionReport::default();

    for candidate in queue {
        match submit_one(candidate, submitter).await {
            Ok(clicked) => {
                report.attempted += 1;
                report.clicked += usize::from(clicked);
            }
            Err(SessionError::Closed) => {
                info!(attempted = report.attempted, "session closed during submission");
                report.interrupted = true;
                break;
            }
            Err(err) => return Err(err),
        }

        progress.inc(1);
        tokio::time::sleep(pace).await;
    }

    Ok(report)
}

/// Type, maybe submit, then erase one word
///
/// Returns whether submit was pressed.
async fn submit_one<S>(candidate: &Candidate, submitter: &S) -> Result<bool, SessionError>
where
    S: WordSubmitter + ?Sized,
{
    submitter.type_word(candidate.text()).await?;

    let clicked = match submitter.submit_visible().await {
        Ok(true) => match submitter.click_submit().await {
            Ok(()) => true,
            Err(SessionError::Closed) => return Err(SessionError::Closed),
            Err(err) => {
                debug!(word = candidate.text(), error = %err, "submit click failed");
                false
            }
        },
        Ok(false) => false,
        Err(SessionError::Closed) => return Err(SessionError::Closed),
        Err(err) => {
            debug!(word = candidate.text(), error = %err, "submit visibility check failed");
            false
        }
    };

    // Always clear the shared input, submitted or not
    submitter.erase(candidate.len()).await?;
    Ok(clicked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::page::fake::{Action, FakePage};
    use crate::solver::solve;
    use crate::wordlists::{Dictionary, DictionaryConfig};

    fn queue() -> SubmissionQueue {
        let dictionary = Dictionary::from_words(
            ["cadet", "aced", "decade"],
            &DictionaryConfig::default(),
        );
        solve(&dictionary, &Puzzle::new('a', "cdet".chars()).unwrap())
    }

    async fn run(page: &FakePage) -> Result<SubmissionReport, SessionError> {
        run_submissions(&queue(), page, Duration::ZERO, &ProgressBar::hidden()).await
    }

    #[tokio::test]
    async fn submits_in_queue_order() {
        let page = FakePage::new("a", "cdet");
        let report = run(&page).await.unwrap();

        assert_eq!(page.typed(), ["cadet", "decade", "aced"]);
        assert_eq!(
            report,
            SubmissionReport {
                attempted: 3,
                clicked: 3,
                interrupted: false,
            }
        );
    }

    #[tokio::test]
    async fn erases_exactly_what_was_typed() {
        let page = FakePage::new("a", "cdet");
        run(&page).await.unwrap();

        let actions = page.actions();
        let mut pending: Option<usize> = None;
        for action in actions {
            match action {
                Action::Type(word) => {
                    assert!(pending.is_none(), "typed before erasing previous word");
                    pending = Some(word.chars().count());
                }
                Action::Erase(count) => {
                    assert_eq!(Some(count), pending.take());
                }
                Action::Click => assert!(pending.is_some()),
            }
        }
        assert!(pending.is_none());
    }

    #[tokio::test]
    async fn clicks_only_when_submit_visible() {
        let mut page = FakePage::new("a", "cdet");
        page.submit_shown = vec![true, false, true];
        let report = run(&page).await.unwrap();

        assert_eq!(report.attempted, 3);
        assert_eq!(report.clicked, 2);
        assert_eq!(
            page.actions(),
            [
                Action::Type("cadet".into()),
                Action::Click,
                Action::Erase(5),
                Action::Type("decade".into()),
                Action::Erase(6),
                Action::Type("aced".into()),
                Action::Click,
                Action::Erase(4),
            ]
        );
    }

    #[tokio::test]
    async fn failed_click_still_erases_and_continues() {
        let mut page = FakePage::new("a", "cdet");
        page.click_fails = true;
        let report = run(&page).await.unwrap();

        assert_eq!(report.attempted, 3);
        assert_eq!(report.clicked, 0);
        assert_eq!(
            page.actions().iter().filter(|a| matches!(a, Action::Erase(_))).count(),
            3
        );
    }

    #[tokio::test]
    async fn closed_session_stops_cleanly() {
        let mut page = FakePage::new("a", "cdet");
        page.close_after = Some(1);
        let progress = ProgressBar::hidden();
        let report = run_submissions(&queue(), &page, Duration::ZERO, &progress)
            .await
            .unwrap();

        assert!(report.interrupted);
        assert_eq!(report.attempted, 1);
        assert_eq!(progress.position(), 1);
        assert_eq!(page.typed(), ["cadet"]);
    }

    #[tokio::test]
    async fn empty_queue_submits_nothing() {
        let page = FakePage::new("a", "cdet");
        let report = run_submissions(
            &SubmissionQueue::default(),
            &page,
            Duration::ZERO,
            &ProgressBar::hidden(),
        )
        .await
        .unwrap();

        assert_eq!(report, SubmissionReport::default());
        assert!(page.actions().is_empty());
    }
}
