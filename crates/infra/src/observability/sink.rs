use std::sync::Arc;

use querytap_core::EventSink;
use querytap_domain::EventKind;

/// Event sink decorator that mirrors events into `tracing`.
///
/// Every event is emitted at `debug` under the `querytap::events` target.
/// Failed calls are already reported at `warn` by the proxy itself.
#[derive(Debug, Clone)]
pub struct TracingSink {
    inner: Arc<dyn EventSink>,
}

impl TracingSink {
    /// Mirror every event recorded into `inner`.
    pub fn new(inner: Arc<dyn EventSink>) -> Self {
        Self { inner }
    }

    /// The sink events are forwarded to.
    pub fn inner(&self) -> &Arc<dyn EventSink> {
        &self.inner
    }
}

impl EventSink for TracingSink {
    fn record(&self, kind: EventKind, detail: String) {
        tracing::debug!(target: "querytap::events", %kind, %detail, "integration event");
        self.inner.record(kind, detail);
    }
}
