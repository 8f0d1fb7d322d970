//! Shared test helpers for `querytap-core` integration tests.
//!
//! [`FakeBackend`] behaves like a hosted table API client: `from_table`
//! returns a consuming builder (`select`, `eq`, `order`) with an async
//! `execute`. Failures can be scripted per table and every execution is
//! counted so tests can prove the proxy never re-runs a call.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use querytap_core::{EventLog, Interceptor, IssueClassifier, QueryBuilder, QueryClient};
use querytap_domain::ExecArgs;
use serde::Serialize;
use serde_json::Value;

/// Rows plus an optional exact count, like a hosted REST response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub data: Vec<Value>,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
}

#[derive(Debug, Default)]
struct BackendState {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failures: Mutex<HashMap<String, String>>,
    executions: AtomicUsize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<BackendState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.state.tables.lock().expect("tables mutex poisoned").insert(table.to_string(), rows);
        self
    }

    /// Make every execution against `table` fail with `message`.
    pub fn fail_table(&self, table: &str, message: &str) {
        self.state
            .failures
            .lock()
            .expect("failures mutex poisoned")
            .insert(table.to_string(), message.to_string());
    }

    /// Executions that reached the backend.
    pub fn executions(&self) -> usize {
        self.state.executions.load(Ordering::SeqCst)
    }

    /// A backend-specific method that the proxy must pass through.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<_> =
            self.state.tables.lock().expect("tables mutex poisoned").keys().cloned().collect();
        names.sort();
        names
    }
}

impl QueryClient for FakeBackend {
    type Query = FakeQuery;

    fn from_table(&self, resource: &str) -> FakeQuery {
        FakeQuery {
            state: Arc::clone(&self.state),
            table: resource.to_string(),
            columns: None,
            filters: Vec::new(),
            order: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeQuery {
    state: Arc<BackendState>,
    table: String,
    columns: Option<String>,
    filters: Vec<(String, Value)>,
    order: Option<(String, bool)>,
}

impl FakeQuery {
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    pub fn order(mut self, column: &str, desc: bool) -> Self {
        self.order = Some((column.to_string(), desc));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl QueryBuilder for FakeQuery {
    type Output = ApiResponse;
    type Error = BackendError;

    async fn execute(&self, args: ExecArgs) -> Result<ApiResponse, BackendError> {
        self.state.executions.fetch_add(1, Ordering::SeqCst);

        if let Some(message) =
            self.state.failures.lock().expect("failures mutex poisoned").get(&self.table)
        {
            return Err(BackendError { message: message.clone() });
        }

        let mut data: Vec<Value> = self
            .state
            .tables
            .lock()
            .expect("tables mutex poisoned")
            .get(&self.table)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|row| self.filters.iter().all(|(column, value)| row.get(column) == Some(value)))
            .collect();

        if let Some((column, desc)) = &self.order {
            data.sort_by(|a, b| {
                let ordering = a[column].to_string().cmp(&b[column].to_string());
                if *desc {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        let count = (args.get("count") == Some(&Value::from("exact"))).then_some(data.len());
        Ok(ApiResponse { data, count })
    }

    fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(columns) = &self.columns {
            parts.push(format!("select={columns}"));
        }
        for (column, value) in &self.filters {
            parts.push(format!("{column}=eq.{value}"));
        }
        if let Some((column, desc)) = &self.order {
            parts.push(format!("order={column}.{}", if *desc { "desc" } else { "asc" }));
        }
        (!parts.is_empty()).then(|| parts.join("&"))
    }
}

/// Log, classifier and interceptor wired together.
pub struct Harness {
    pub log: Arc<EventLog>,
    pub classifier: Arc<IssueClassifier>,
    pub interceptor: Interceptor,
}

impl Harness {
    pub fn new() -> Self {
        let log = Arc::new(EventLog::new(10_000));
        let classifier = Arc::new(IssueClassifier::builtin());
        let interceptor = Interceptor::new(log.clone(), classifier.clone());
        Self { log, classifier, interceptor }
    }
}

pub fn ideas_backend() -> FakeBackend {
    FakeBackend::new().with_rows(
        "ideas",
        vec![
            serde_json::json!({ "id": 1, "content": "dark mode", "status": "open" }),
            serde_json::json!({ "id": 2, "content": "csv export", "status": "done" }),
            serde_json::json!({ "id": 3, "content": "sprint board", "status": "open" }),
        ],
    )
}
