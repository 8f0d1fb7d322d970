//! Arguments passed to a terminal query execution.
//!
//! Hosted query clients accept loosely typed options on `execute` (count
//! modes, head-only requests, return preferences). [`ExecArgs`] keeps them as
//! JSON values split into positional and keyword parts so the interceptor
//! can log them without knowing the client.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::text::{describe, to_value_lossy};

/// Positional and keyword arguments of one execution call.
///
/// Keyword arguments are kept sorted by name so their text form is stable.
///
/// ```rust
/// use querytap_domain::ExecArgs;
///
/// let args = ExecArgs::new().arg("exact").kwarg("head", &true);
/// assert_eq!(args.to_string(), r#"Args: ["exact"] | Kwargs: {"head":true}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecArgs {
    #[serde(default)]
    positional: Vec<Value>,
    #[serde(default)]
    keyword: BTreeMap<String, Value>,
}

impl ExecArgs {
    /// No arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.positional.push(to_value_lossy(value));
        self
    }

    /// Set a keyword argument, replacing any previous value under `name`.
    #[must_use]
    pub fn kwarg<T: Serialize + ?Sized>(mut self, name: impl Into<String>, value: &T) -> Self {
        self.keyword.insert(name.into(), to_value_lossy(value));
        self
    }

    /// Positional arguments in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments, sorted by name.
    pub fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Look up a keyword argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

impl fmt::Display for ExecArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Args: {} | Kwargs: {}", describe(&self.positional), describe(&self.keyword))
    }
}
