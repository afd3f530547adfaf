//! In-place status line

use super::ProgressSnapshot;
use indicatif::ProgressBar;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Format a snapshot as `<currentTitle> - <nextLeft> points to <nextTitle>`
#[must_use]
pub fn format_status_line(snapshot: &ProgressSnapshot) -> String {
    format!(
        "{} - {} points to {}",
        snapshot.current_title, snapshot.next_left, snapshot.next_title
    )
}

/// Redraw `status` whenever the progress cell changes
///
/// The current value is drawn immediately. The task ends once the publisher is
/// dropped.
pub fn spawn_status_display(
    mut receiver: watch::Receiver<ProgressSnapshot>,
    status: ProgressBar,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        status.set_message(format_status_line(&receiver.borrow_and_update()));

        while receiver.changed().await.is_ok() {
            let line = format_status_line(&receiver.borrow_and_update());
            status.set_message(line);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::progress_channel;

    #[test]
    fn status_line_format() {
        let snapshot = ProgressSnapshot::new("Good", "5", "Great");
        assert_eq!(format_status_line(&snapshot), "Good - 5 points to Great");
    }

    #[tokio::test]
    async fn display_tracks_latest_snapshot() {
        let (publisher, receiver) = progress_channel(ProgressSnapshot::new("Beginner", "2", "Good Start"));
        let status = ProgressBar::hidden();
        let handle = spawn_status_display(receiver, status.clone());

        publisher.publish(ProgressSnapshot::new("Good", "5", "Great"));
        drop(publisher);
        handle.await.unwrap();

        assert_eq!(status.message(), "Good - 5 points to Great");
    }

    #[tokio::test]
    async fn display_draws_initial_snapshot() {
        let (publisher, receiver) = progress_channel(ProgressSnapshot::new("Beginner", "2", "Good Start"));
        let status = ProgressBar::hidden();
        let handle = spawn_status_display(receiver, status.clone());

        drop(publisher);
        handle.await.unwrap();

        assert_eq!(status.message(), "Beginner - 2 points to Good Start");
    }
}
