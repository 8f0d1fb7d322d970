//! Instrumentation events recorded by the interceptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_TIME_FORMAT;
use crate::impl_label_conversions;

/// What an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum EventKind {
    /// A terminal execution is about to run.
    Query,
    /// The execution returned normally.
    Response,
    /// The execution failed.
    Error,
}

impl_label_conversions!(EventKind {
    Query => "QUERY",
    Response => "RESPONSE",
    Error => "ERROR",
});

/// A single immutable log entry.
///
/// `seq` is assigned by the log at append time and is strictly increasing,
/// so it reflects append order even after older entries were evicted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Position in append order, starting at 0.
    pub seq: u64,
    /// When the event was appended (UTC).
    pub timestamp: DateTime<Utc>,
    /// What the event describes.
    pub kind: EventKind,
    /// Call description, rendered result or error message.
    pub detail: String,
}

impl Event {
    /// Build an event stamped with the current wall-clock time.
    pub fn new(seq: u64, kind: EventKind, detail: impl Into<String>) -> Self {
        Self { seq, timestamp: Utc::now(), kind, detail: detail.into() }
    }

    /// `true` for [`EventKind::Error`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == EventKind::Error
    }

    /// Timestamp formatted for dashboards (`YYYY-MM-DD HH:MM:SS`, UTC).
    #[must_use]
    pub fn display_time(&self) -> String {
        self.timestamp.format(DISPLAY_TIME_FORMAT).to_string()
    }
}
