//! Host-side consumer of the page console

use super::{ProgressPublisher, parse_progress_line};
use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Feed console lines into the progress cell until the stream ends
///
/// Untagged lines are ignored and malformed payloads are skipped, so a bad
/// update never reaches the display or interrupts submission. The stream ends
/// when the page closes.
pub fn spawn_progress_listener<S>(lines: S, publisher: ProgressPublisher) -> JoinHandle<usize>
where
    S: Stream<Item = String> + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = std::pin::pin!(lines);
        let mut updates = 0;

        while let Some(line) = lines.next().await {
            match parse_progress_line(&line) {
                Ok(Some(snapshot)) => {
                    if publisher.publish(snapshot) {
                        updates += 1;
                    }
                }
                Ok(None) => trace!(%line, "ignoring console line"),
                Err(err) => debug!(%line, error = %err, "skipping malformed progress update"),
            }
        }

        debug!(updates, "console stream ended");
        updates
    })
}
