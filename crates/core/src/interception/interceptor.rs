use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use querytap_domain::{QueryTapError, Result};

use super::ports::QueryClient;
use super::proxy::{Tap, TappedClient};
use crate::classification::IssueClassifier;
use crate::event_log::ports::EventSink;

type Binding = Arc<dyn Any + Send + Sync>;

/// Registration entry point for tapped clients.
///
/// Owns the mapping from client name to proxy. Wrapping is idempotent per
/// name and per underlying client instance: a second `wrap` with either
/// returns the proxy created the first time, so executions are never
/// recorded twice.
///
/// ```rust,ignore
/// let interceptor = Interceptor::new(log.clone(), Arc::new(IssueClassifier::default()));
/// let backend = interceptor.wrap(Arc::new(client), "backend")?;
/// let rows = backend.from_table("ideas").execute(ExecArgs::new()).await?;
/// ```
#[derive(Debug)]
pub struct Interceptor {
    sink: Arc<dyn EventSink>,
    classifier: Arc<IssueClassifier>,
    bindings: RwLock<Bindings>,
}

#[derive(Debug, Default)]
struct Bindings {
    by_name: HashMap<String, Binding>,
    // Address of the wrapped `Arc<C>` -> name. The proxy keeps that
    // allocation alive while bound, so the address cannot be reused.
    by_client: HashMap<usize, String>,
}

impl Interceptor {
    /// Interceptor writing to `sink` and annotating failures with `classifier`.
    pub fn new(sink: Arc<dyn EventSink>, classifier: Arc<IssueClassifier>) -> Self {
        Self { sink, classifier, bindings: RwLock::new(Bindings::default()) }
    }

    /// Wrap `client` under `name`, or return the existing proxy.
    ///
    /// Wrapping a client that is itself a proxy yields a forwarding layer
    /// that records nothing.
    ///
    /// # Errors
    /// Returns `QueryTapError::Registry` when `name` is already bound to a
    /// client of a different type.
    pub fn wrap<C: QueryClient>(
        &self,
        client: Arc<C>,
        name: &str,
    ) -> Result<Arc<TappedClient<C>>> {
        let address = client_address(&client);
        let mut bindings = self.bindings.write();

        let bound_name = bindings.by_client.get(&address).map(String::as_str).unwrap_or(name);
        if let Some(existing) = bindings.by_name.get(bound_name) {
            let existing = downcast::<C>(existing, bound_name)?;
            tracing::debug!(client = bound_name, requested = name, "client already wrapped");
            return Ok(existing);
        }

        let observe = !client.is_tapped();
        let label: Arc<str> = Arc::from(name);
        let tap = observe.then(|| {
            Tap::new(Arc::clone(&label), Arc::clone(&self.sink), Arc::clone(&self.classifier))
        });
        let tapped = Arc::new(TappedClient::new(client, label, tap));

        bindings.by_name.insert(name.to_string(), tapped.clone());
        bindings.by_client.insert(address, name.to_string());
        tracing::info!(client = name, observe, "client registered");
        Ok(tapped)
    }

    /// Proxy registered under `name`, if it wraps a `C`.
    pub fn get<C: QueryClient>(&self, name: &str) -> Option<Arc<TappedClient<C>>> {
        let bindings = self.bindings.read();
        bindings.by_name.get(name).and_then(|binding| Arc::clone(binding).downcast().ok())
    }

    /// `true` if a client is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.read().by_name.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.bindings.read().by_name.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.bindings.read().by_name.len()
    }

    /// `true` if no client is registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.read().by_name.is_empty()
    }

    /// Forget the binding for `name`. Proxies already handed out keep
    /// recording; a later `wrap` creates a fresh proxy.
    pub fn unregister(&self, name: &str) -> bool {
        let mut bindings = self.bindings.write();
        let removed = bindings.by_name.remove(name).is_some();
        if removed {
            bindings.by_client.retain(|_, bound| bound.as_str() != name);
            tracing::info!(client = name, "client unregistered");
        }
        removed
    }

    /// Forget every binding.
    pub fn clear(&self) {
        let mut bindings = self.bindings.write();
        bindings.by_name.clear();
        bindings.by_client.clear();
    }

    /// Classifier consulted when a wrapped call fails.
    pub fn classifier(&self) -> &Arc<IssueClassifier> {
        &self.classifier
    }
}

fn client_address<C>(client: &Arc<C>) -> usize {
    Arc::as_ptr(client) as usize
}

fn downcast<C: QueryClient>(binding: &Binding, name: &str) -> Result<Arc<TappedClient<C>>> {
    Arc::clone(binding).downcast::<TappedClient<C>>().map_err(|_| {
        QueryTapError::Registry(format!(
            "client '{name}' is already registered with a different client type"
        ))
    })
}
