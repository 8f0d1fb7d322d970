use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use async_trait::async_trait;
use querytap_domain::{describe, EventKind, ExecArgs};
use serde::Serialize;

use super::ports::{QueryBuilder, QueryClient};
use crate::classification::IssueClassifier;
use crate::event_log::ports::EventSink;

/// Recording side shared by a tapped client and every query it creates.
#[derive(Debug, Clone)]
pub(crate) struct Tap {
    client: Arc<str>,
    sink: Arc<dyn EventSink>,
    classifier: Arc<IssueClassifier>,
}

impl Tap {
    pub(crate) fn new(
        client: Arc<str>,
        sink: Arc<dyn EventSink>,
        classifier: Arc<IssueClassifier>,
    ) -> Self {
        Self { client, sink, classifier }
    }

    fn before(&self, resource: &str, args: &ExecArgs, chain: Option<String>) {
        let mut detail = format!("{}: {} | {}", self.client, resource, args);
        if let Some(chain) = chain {
            detail.push_str(" | Chain: ");
            detail.push_str(&chain);
        }
        tracing::debug!(client = %self.client, resource, "executing query");
        self.sink.record(EventKind::Query, detail);
    }

    fn succeeded<T: Serialize + ?Sized>(&self, output: &T) {
        self.sink.record(EventKind::Response, describe(output));
    }

    fn failed(&self, resource: &str, err: &(dyn std::error::Error + 'static)) {
        let message = err.to_string();
        match self.classifier.classify_text(&message) {
            Some(suggestion) => tracing::warn!(
                client = %self.client,
                resource,
                error = %message,
                suggestion,
                "query failed with a known issue"
            ),
            None => tracing::warn!(client = %self.client, resource, error = %message, "query failed"),
        }
        self.sink.record(EventKind::Error, message);
    }
}

/// A client whose queries are observed.
///
/// Obtained from [`Interceptor::wrap`](super::Interceptor::wrap). Everything
/// other than [`QueryClient::from_table`] is reachable on the wrapped client
/// through `Deref`.
pub struct TappedClient<C> {
    inner: Arc<C>,
    name: Arc<str>,
    tap: Option<Tap>,
}

impl<C> TappedClient<C> {
    pub(crate) fn new(inner: Arc<C>, name: Arc<str>, tap: Option<Tap>) -> Self {
        Self { inner, name, tap }
    }

    /// Name this client was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decorated client.
    pub fn inner(&self) -> &Arc<C> {
        &self.inner
    }

    /// `false` when this proxy only forwards because the wrapped client
    /// already records its own executions.
    pub fn is_observing(&self) -> bool {
        self.tap.is_some()
    }
}

impl<C: QueryClient> QueryClient for TappedClient<C> {
    type Query = TappedQuery<C::Query>;

    fn from_table(&self, resource: &str) -> Self::Query {
        TappedQuery {
            inner: self.inner.from_table(resource),
            resource: resource.into(),
            tap: self.tap.clone(),
        }
    }

    fn is_tapped(&self) -> bool {
        true
    }
}

impl<C> Deref for TappedClient<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C> fmt::Debug for TappedClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TappedClient")
            .field("name", &self.name)
            .field("observing", &self.is_observing())
            .finish_non_exhaustive()
    }
}

/// A query builder whose terminal execution is observed.
///
/// Builder methods of the wrapped query are reachable through `Deref` /
/// `DerefMut`. Consuming builder methods keep the tap through
/// [`refine`](Self::refine):
///
/// ```rust,ignore
/// let rows = client
///     .from_table("ideas")
///     .refine(|q| q.select("*").order("created_at", true))
///     .execute(ExecArgs::new())
///     .await?;
/// ```
pub struct TappedQuery<Q> {
    inner: Q,
    resource: Arc<str>,
    tap: Option<Tap>,
}

impl<Q> TappedQuery<Q> {
    /// Apply a consuming builder step to the wrapped query.
    #[must_use]
    pub fn refine(self, step: impl FnOnce(Q) -> Q) -> Self {
        let Self { inner, resource, tap } = self;
        Self { inner: step(inner), resource, tap }
    }

    /// Resource this query was started on.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Drop the tap and return the plain builder.
    pub fn into_inner(self) -> Q {
        self.inner
    }

    /// `true` if executing this query records events.
    pub fn is_observing(&self) -> bool {
        self.tap.is_some()
    }
}

impl<Q> Deref for TappedQuery<Q> {
    type Target = Q;

    fn deref(&self) -> &Q {
        &self.inner
    }
}

impl<Q> DerefMut for TappedQuery<Q> {
    fn deref_mut(&mut self) -> &mut Q {
        &mut self.inner
    }
}

impl<Q: fmt::Debug> fmt::Debug for TappedQuery<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TappedQuery")
            .field("resource", &self.resource)
            .field("observing", &self.is_observing())
            .field("inner", &self.inner)
            .finish()
    }
}

#[async_trait]
impl<Q: QueryBuilder> QueryBuilder for TappedQuery<Q> {
    type Output = Q::Output;
    type Error = Q::Error;

    async fn execute(&self, args: ExecArgs) -> Result<Self::Output, Self::Error> {
        let Some(tap) = self.tap.as_ref() else {
            return self.inner.execute(args).await;
        };

        tap.before(&self.resource, &args, self.inner.describe());
        match self.inner.execute(args).await {
            Ok(output) => {
                tap.succeeded(&output);
                Ok(output)
            }
            Err(err) => {
                tap.failed(&self.resource, &err);
                Err(err)
            }
        }
    }

    fn describe(&self) -> Option<String> {
        self.inner.describe()
    }
}
