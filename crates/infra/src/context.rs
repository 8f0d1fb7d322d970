//! Composition root
//!
//! [`TapContext`] wires one event log, one classifier and one interceptor
//! together from a [`TapConfig`]. Hosts normally build one and pass it (or
//! its parts) around explicitly; hosts that cannot thread state through
//! their call sites may install a single process-wide instance instead.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use querytap_core::{
    Dashboard, EventLog, EventSink, Interceptor, IssueClassifier, QueryClient, TappedClient,
};
use querytap_domain::{QueryTapError, Result, TapConfig};

use crate::config::loader;
use crate::observability::TracingSink;

static GLOBAL: OnceCell<TapContext> = OnceCell::new();

/// A configured event log, classifier and interceptor.
///
/// Cloning is cheap and every clone shares the same log and registry.
#[derive(Debug, Clone)]
pub struct TapContext {
    config: Arc<TapConfig>,
    log: Arc<EventLog>,
    classifier: Arc<IssueClassifier>,
    interceptor: Arc<Interceptor>,
}

impl TapContext {
    /// Build a context from `config`.
    ///
    /// The interceptor writes through a [`TracingSink`], so recorded events
    /// also reach the `tracing` subscriber.
    ///
    /// # Errors
    /// Returns `QueryTapError::Config` if `config` fails validation.
    pub fn new(config: TapConfig) -> Result<Self> {
        config.validate()?;

        let log = Arc::new(EventLog::from_config(&config.event_log));
        let classifier = Arc::new(IssueClassifier::new(config.known_issues.iter().cloned()));
        let sink: Arc<dyn EventSink> = Arc::new(TracingSink::new(log.clone()));
        let interceptor = Arc::new(Interceptor::new(sink, Arc::clone(&classifier)));

        tracing::debug!(
            capacity = log.capacity(),
            known_issues = classifier.len(),
            "tap context created"
        );
        Ok(Self { config: Arc::new(config), log, classifier, interceptor })
    }

    /// Build a context from [`loader::load`].
    ///
    /// # Errors
    /// Propagates configuration loading and validation errors.
    pub fn from_env() -> Result<Self> {
        Self::new(loader::load()?)
    }

    /// Wrap `client` under `name` in this context's interceptor.
    ///
    /// # Errors
    /// See [`Interceptor::wrap`].
    pub fn wrap<C: QueryClient>(&self, client: Arc<C>, name: &str) -> Result<Arc<TappedClient<C>>> {
        self.interceptor.wrap(client, name)
    }

    /// Dashboard using the configured window.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.log.clone(), Arc::clone(&self.classifier), self.config.dashboard.window)
    }

    /// Compact dashboard over the last 30 events.
    pub fn sidebar(&self) -> Dashboard {
        Dashboard::sidebar(self.log.clone(), Arc::clone(&self.classifier))
    }

    /// Validated configuration this context was built from.
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Shared event log.
    pub fn log(&self) -> &Arc<EventLog> {
        &self.log
    }

    /// Classifier built from the configured known issues.
    pub fn classifier(&self) -> &Arc<IssueClassifier> {
        &self.classifier
    }

    /// Interceptor that records into [`log`](Self::log).
    pub fn interceptor(&self) -> &Arc<Interceptor> {
        &self.interceptor
    }

    /// Make this context the process-wide instance.
    ///
    /// # Errors
    /// Returns `QueryTapError::Config` if a global context is already
    /// installed; the existing one is left untouched.
    pub fn install_global(self) -> Result<&'static Self> {
        GLOBAL.try_insert(self).map_err(|_| {
            QueryTapError::Config("a global QueryTap context is already installed".to_string())
        })
    }

    /// The process-wide instance, if one was installed.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }

    /// The process-wide instance, building it from the environment on first
    /// use.
    ///
    /// # Errors
    /// Propagates [`from_env`](Self::from_env) errors; a failed attempt
    /// leaves the global unset.
    pub fn global_or_init() -> Result<&'static Self> {
        GLOBAL.get_or_try_init(Self::from_env)
    }
}
