use std::sync::Arc;

use querytap_common::error::ErrorSeverity;
use querytap_domain::constants::{FULL_LOG_WINDOW, SIDEBAR_WINDOW};
use querytap_domain::Event;
use serde::Serialize;

use super::ports::DashboardRenderer;
use crate::classification::IssueClassifier;
use crate::event_log::ports::EventSource;

/// Pull-based consumer of an event source.
///
/// Never mutates the source. Each [`snapshot`](Self::snapshot) reads the
/// newest `window` events at that moment; refresh cadence belongs to the
/// caller.
#[derive(Debug, Clone)]
pub struct Dashboard {
    source: Arc<dyn EventSource>,
    classifier: Arc<IssueClassifier>,
    window: usize,
}

/// One annotated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardRow {
    pub event: Event,
    /// Fix suggested by the first matching known issue.
    pub suggestion: Option<String>,
    /// Drives highlighting in renderers.
    pub severity: ErrorSeverity,
}

/// A renderer-agnostic snapshot of the newest events, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Window the snapshot was taken with.
    pub window: usize,
    /// Oldest first.
    pub rows: Vec<DashboardRow>,
}

impl Dashboard {
    /// Dashboard over `source` showing at most `window` events (minimum 1).
    pub fn new(
        source: Arc<dyn EventSource>,
        classifier: Arc<IssueClassifier>,
        window: usize,
    ) -> Self {
        Self { source, classifier, window: window.max(1) }
    }

    /// Compact view of the last 30 events.
    pub fn sidebar(source: Arc<dyn EventSource>, classifier: Arc<IssueClassifier>) -> Self {
        Self::new(source, classifier, SIDEBAR_WINDOW)
    }

    /// Full view of the last 100 events.
    pub fn full_log(source: Arc<dyn EventSource>, classifier: Arc<IssueClassifier>) -> Self {
        Self::new(source, classifier, FULL_LOG_WINDOW)
    }

    /// Same source and classifier, different window.
    #[must_use]
    pub fn with_window(&self, window: usize) -> Self {
        Self::new(Arc::clone(&self.source), Arc::clone(&self.classifier), window)
    }

    /// Number of most recent events each snapshot covers.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Read and annotate the current window.
    pub fn snapshot(&self) -> DashboardView {
        let rows = self
            .source
            .recent(self.window)
            .into_iter()
            .map(|event| {
                let suggestion = self.classifier.classify(&event).map(str::to_owned);
                let severity = severity_for(&event, suggestion.is_some());
                DashboardRow { event, suggestion, severity }
            })
            .collect();
        DashboardView { window: self.window, rows }
    }

    /// Snapshot and render in one step.
    pub fn render(&self, renderer: &dyn DashboardRenderer) -> String {
        renderer.render(&self.snapshot())
    }
}

/// Errors outrank suggestions; a suggestion on a non-error event is a
/// warning.
fn severity_for(event: &Event, has_suggestion: bool) -> ErrorSeverity {
    if event.is_error() {
        ErrorSeverity::Error
    } else if has_suggestion {
        ErrorSeverity::Warning
    } else {
        ErrorSeverity::Info
    }
}

impl DashboardView {
    /// `true` if the log held no events.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows, at most the window.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows rendered with a non-`Info` severity.
    pub fn highlighted(&self) -> impl Iterator<Item = &DashboardRow> + '_ {
        self.rows.iter().filter(|row| row.severity > ErrorSeverity::Info)
    }

    /// Number of rows for `ERROR` events.
    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.severity.is_failure()).count()
    }
}
