//! # QueryTap Core
//!
//! Query interception and event logging - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for query clients, event sinks and renderers
//! - The bounded [`EventLog`]
//! - The [`Interceptor`] that wraps any [`QueryClient`] in a logging proxy
//! - The [`IssueClassifier`] for known failure signatures
//! - The read-only [`Dashboard`] consumer
//!
//! ## Architecture Principles
//! - Only depends on `querytap-common` and `querytap-domain`
//! - No I/O, no runtime: everything async is driven by the caller
//! - Wrapped-call failures are logged and handed back unchanged

pub mod classification;
pub mod dashboard;
pub mod event_log;
pub mod interception;

// Re-export specific items to avoid ambiguity
pub use classification::IssueClassifier;
pub use dashboard::ports::DashboardRenderer;
pub use dashboard::{Dashboard, DashboardRow, DashboardView};
pub use event_log::ports::{EventSink, EventSource};
pub use event_log::EventLog;
pub use interception::ports::{QueryBuilder, QueryClient};
pub use interception::{Interceptor, TappedClient, TappedQuery};
