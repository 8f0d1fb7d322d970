//! Observability infrastructure for logging and event mirroring
//!
//! - [`init_tracing`] installs the process-wide `tracing` subscriber from
//!   [`LoggingConfig`](querytap_domain::LoggingConfig).
//! - [`TracingSink`] forwards every recorded event to an inner sink and
//!   mirrors it into `tracing`, so instrumentation events show up in the
//!   regular application log as well as on dashboards.

mod sink;
mod subscriber;

pub use sink::TracingSink;
pub use subscriber::init_tracing;
