//! Port interfaces for recording and reading events
//!
//! The interceptor only needs somewhere to write; dashboards only need
//! somewhere to read. [`EventLog`](super::EventLog) is both.

use std::fmt::Debug;

use querytap_domain::{Event, EventKind};

/// Destination for instrumentation events.
///
/// Implementations must never fail and must tolerate concurrent callers.
pub trait EventSink: Send + Sync + Debug {
    /// Record one event.
    fn record(&self, kind: EventKind, detail: String);
}

/// Pull-based read access to recorded events.
pub trait EventSource: Send + Sync + Debug {
    /// The newest `n` events, oldest first.
    fn recent(&self, n: usize) -> Vec<Event>;
}
