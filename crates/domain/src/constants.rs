//! Domain constants
//!
//! Centralized defaults for the event log, the dashboard windows and the
//! text placeholders written by the interceptor.

// Event log
/// Events kept by default before the oldest is evicted.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 10_000;
/// Largest capacity accepted by configuration validation.
pub const MAX_EVENT_LOG_CAPACITY: usize = 1_000_000;

// Dashboard windows
/// Events shown by the compact sidebar dashboard.
pub const SIDEBAR_WINDOW: usize = 30;
/// Events shown by the full log view.
pub const FULL_LOG_WINDOW: usize = 100;
/// Window used when configuration does not set one.
pub const DEFAULT_DASHBOARD_WINDOW: usize = FULL_LOG_WINDOW;
/// Shown by renderers when the log holds no events.
pub const EMPTY_LOG_MESSAGE: &str = "No integration events logged yet.";

// Text rendering
/// `RESPONSE` detail for results that cannot be rendered as JSON.
pub const UNSERIALIZABLE_PLACEHOLDER: &str = "<unserializable>";
/// `chrono` format for dashboard timestamps.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Logging
/// `tracing` filter directive used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";
