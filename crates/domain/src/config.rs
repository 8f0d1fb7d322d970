//! Configuration structures
//!
//! Every section has serde defaults, so an empty TOML or JSON document
//! yields [`TapConfig::default`].

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DASHBOARD_WINDOW, DEFAULT_EVENT_LOG_CAPACITY, DEFAULT_LOG_FILTER, MAX_EVENT_LOG_CAPACITY,
};
use crate::errors::{QueryTapError, Result};
use crate::types::KnownIssue;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapConfig {
    pub event_log: EventLogConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
    /// Issue registry in match order; defaults to the built-in issues.
    pub known_issues: Vec<KnownIssue>,
}

/// Event log sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLogConfig {
    /// Ring capacity; the oldest event is evicted once it is reached.
    pub capacity: usize,
}

/// Dashboard window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of most recent events pulled per refresh.
    pub window: usize,
}

/// `tracing` subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,querytap_core=debug`.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            event_log: EventLogConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
            known_issues: KnownIssue::builtin(),
        }
    }
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_EVENT_LOG_CAPACITY }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { window: DEFAULT_DASHBOARD_WINDOW }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

impl TapConfig {
    /// Reject settings the runtime cannot honour.
    ///
    /// # Errors
    /// Returns `QueryTapError::Config` for a zero or oversized capacity, a
    /// zero window, or a known issue with an empty pattern (which would match
    /// every event).
    pub fn validate(&self) -> Result<()> {
        if self.event_log.capacity == 0 {
            return Err(QueryTapError::Config("event_log.capacity must be > 0".into()));
        }
        if self.event_log.capacity > MAX_EVENT_LOG_CAPACITY {
            return Err(QueryTapError::Config(format!(
                "event_log.capacity must be <= {MAX_EVENT_LOG_CAPACITY}"
            )));
        }
        if self.dashboard.window == 0 {
            return Err(QueryTapError::Config("dashboard.window must be > 0".into()));
        }
        if let Some(index) = self.known_issues.iter().position(|issue| issue.pattern.trim().is_empty())
        {
            return Err(QueryTapError::Config(format!(
                "known_issues[{index}].pattern must not be empty"
            )));
        }
        Ok(())
    }
}
