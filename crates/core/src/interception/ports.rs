//! Port interfaces for wrapped query clients
//!
//! A client selects a named resource and hands back a builder; the builder
//! exposes a terminal `execute`. These traits describe only that shape, so
//! any hosted-backend SDK can be tapped by implementing them in an adapter.

use async_trait::async_trait;
use querytap_domain::ExecArgs;
use serde::Serialize;

/// A query under construction with a terminal execution step.
#[async_trait]
pub trait QueryBuilder: Send + Sync {
    /// Value produced by a successful execution.
    type Output: Serialize + Send;

    /// Failure raised by the execution. Its `Display` text is what gets logged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run the query.
    async fn execute(&self, args: ExecArgs) -> Result<Self::Output, Self::Error>;

    /// Optional human-readable summary of the builder state (filters,
    /// ordering, projections) added to `QUERY` events.
    fn describe(&self) -> Option<String> {
        None
    }
}

/// Entry point of a chainable client: selects the resource to query.
pub trait QueryClient: Send + Sync + 'static {
    /// Builder returned for a resource.
    type Query: QueryBuilder;

    /// Start a query against the named table or view.
    fn from_table(&self, resource: &str) -> Self::Query;

    /// `true` when this client already records its own executions.
    ///
    /// Proxies override this so that wrapping a proxy never logs twice.
    fn is_tapped(&self) -> bool {
        false
    }
}
