//! Latest-value progress cell
//!
//! A `tokio::sync::watch` channel holds the one current snapshot. The listener
//! task is the only writer and the status display the only reader.

use super::ProgressSnapshot;
use tokio::sync::watch;

/// Write half of the progress cell
#[derive(Debug)]
pub struct ProgressPublisher {
    sender: watch::Sender<ProgressSnapshot>,
}

/// Create a progress cell seeded with the snapshot read at startup
#[must_use]
pub fn progress_channel(
    initial: ProgressSnapshot,
) -> (ProgressPublisher, watch::Receiver<ProgressSnapshot>) {
    let (sender, receiver) = watch::channel(initial);
    (ProgressPublisher { sender }, receiver)
}

impl ProgressPublisher {
    /// Replace the current snapshot
    ///
    /// Identical consecutive snapshots are dropped. Returns `true` if the value
    /// changed and readers were notified.
    pub fn publish(&self, snapshot: ProgressSnapshot) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        })
    }

    /// The snapshot readers currently see
    #[must_use]
    pub fn current(&self) -> ProgressSnapshot {
        self.sender.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_notifies_on_change() {
        let (publisher, mut receiver) = progress_channel(ProgressSnapshot::default());

        assert!(publisher.publish(ProgressSnapshot::new("Good", "5", "Great")));
        assert!(receiver.has_changed().unwrap());
        assert_eq!(
            *receiver.borrow_and_update(),
            ProgressSnapshot::new("Good", "5", "Great")
        );
    }

    #[test]
    fn identical_snapshots_notify_once() {
        let (publisher, mut receiver) = progress_channel(ProgressSnapshot::default());
        let snapshot = ProgressSnapshot::new("Good", "5", "Great");

        assert!(publisher.publish(snapshot.clone()));
        assert!(!publisher.publish(snapshot.clone()));

        assert!(receiver.has_changed().unwrap());
        receiver.mark_unchanged();
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn initial_value_does_not_notify() {
        let initial = ProgressSnapshot::new("Beginner", "2", "Good Start");
        let (publisher, receiver) = progress_channel(initial.clone());

        assert!(!receiver.has_changed().unwrap());
        assert!(!publisher.publish(initial.clone()));
        assert_eq!(publisher.current(), initial);
    }

    #[test]
    fn last_value_wins() {
        let (publisher, receiver) = progress_channel(ProgressSnapshot::default());

        publisher.publish(ProgressSnapshot::new("Good", "5", "Great"));
        publisher.publish(ProgressSnapshot::new("Great", "9", "Amazing"));

        assert_eq!(
            *receiver.borrow(),
            ProgressSnapshot::new("Great", "9", "Amazing")
        );
    }

    #[test]
    fn dropping_publisher_closes_channel() {
        let (publisher, receiver) = progress_channel(ProgressSnapshot::default());
        drop(publisher);
        assert!(receiver.has_changed().is_err());
    }
}
