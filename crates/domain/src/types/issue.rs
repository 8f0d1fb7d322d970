//! Known-issue signatures used to annotate failures.

use serde::{Deserialize, Serialize};

/// A static text-pattern-to-suggestion mapping.
///
/// `autofix` is carried through configuration but nothing acts on it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownIssue {
    /// Substring matched case-insensitively against event detail text.
    pub pattern: String,
    /// Remediation hint shown next to matching events.
    pub suggestion: String,
    /// Reserved for automatic remediation.
    #[serde(default)]
    pub autofix: bool,
}

impl KnownIssue {
    /// Signature with `autofix` off.
    pub fn new(pattern: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), suggestion: suggestion.into(), autofix: false }
    }

    /// Signatures shipped with the debugger, in match order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new(
                "column reference \"id\" is ambiguous",
                "Use fully qualified column names, e.g., idea_embeddings.id",
            ),
            Self::new(
                "Could not find the",
                "Check if the column exists in your schema and matches your code.",
            ),
        ]
    }
}
