//! Live progress synchronization
//!
//! Score changes happen inside the page, on the page's own event loop. A
//! `MutationObserver` injected into the page raises a `progressUpdate` event
//! whenever the score panel changes, and a second listener re-emits it on the
//! console as a tagged line:
//!
//! ```text
//! page: MutationObserver ─► progressUpdate ─► console.log("PROGRESS_UPDATE:{...}")
//!                                                       │
//! host: console stream ─► parse_progress_line ─► ProgressPublisher ─► watch ─► status line
//! ```
//!
//! The host side holds a single latest-value cell. Updates are best effort and
//! carry no ordering relative to word submissions.

mod channel;
mod display;
mod listener;
mod protocol;
pub mod script;
mod snapshot;

pub use channel::{ProgressPublisher, progress_channel};
pub use display::{format_status_line, spawn_status_display};
pub use listener::spawn_progress_listener;
pub use protocol::{PROGRESS_EVENT, PROGRESS_PREFIX, parse_progress_line};
pub use snapshot::ProgressSnapshot;
