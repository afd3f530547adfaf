//! Console line protocol between the page and the host

use super::ProgressSnapshot;

/// Tag that marks a console line as a progress update
pub const PROGRESS_PREFIX: &str = "PROGRESS_UPDATE:";

/// Name of the in-page event raised by the score panel observer
pub const PROGRESS_EVENT: &str = "progressUpdate";

/// Parse one console line
///
/// Returns `Ok(None)` for lines without the progress prefix, since the console
/// also carries unrelated page output.
///
/// # Errors
///
/// Returns the JSON error if a tagged line carries a malformed payload or is
/// missing a field.
///
/// # Examples
/// ```
/// use spelling_bee::sync::{ProgressSnapshot, parse_progress_line};
///
/// let line = r#"PROGRESS_UPDATE:{"currentTitle":"Good","nextLeft":"5","nextTitle":"Great"}"#;
/// let snapshot = parse_progress_line(line).unwrap().unwrap();
/// assert_eq!(snapshot, ProgressSnapshot::new("Good", "5", "Great"));
///
/// assert!(parse_progress_line("Download the app!").unwrap().is_none());
/// ```
pub fn parse_progress_line(line: &str) -> Result<Option<ProgressSnapshot>, serde_json::Error> {
    line.strip_prefix(PROGRESS_PREFIX)
        .map(serde_json::from_str::<ProgressSnapshot>)
        .transpose()
}
