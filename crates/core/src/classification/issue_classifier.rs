use querytap_domain::{Event, KnownIssue};

/// First-match-wins classifier over case-insensitive substrings.
///
/// Patterns are lowercased once at construction; each lookup lowercases the
/// candidate text once and walks the registry in order.
///
/// ```rust
/// use querytap_core::IssueClassifier;
///
/// let classifier = IssueClassifier::default();
/// assert_eq!(
///     classifier.classify_text(r#"ERROR: column reference "ID" is ambiguous"#),
///     Some("Use fully qualified column names, e.g., idea_embeddings.id"),
/// );
/// assert_eq!(classifier.classify_text("connection refused"), None);
/// ```
#[derive(Debug, Clone)]
pub struct IssueClassifier {
    signatures: Vec<Signature>,
}

#[derive(Debug, Clone)]
struct Signature {
    needle: String,
    issue: KnownIssue,
}

impl IssueClassifier {
    /// Build a classifier; `issues` order is match order.
    #[must_use]
    pub fn new(issues: impl IntoIterator<Item = KnownIssue>) -> Self {
        let signatures = issues
            .into_iter()
            .map(|issue| Signature { needle: issue.pattern.to_lowercase(), issue })
            .collect();
        Self { signatures }
    }

    /// Classifier over [`KnownIssue::builtin`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(KnownIssue::builtin())
    }

    /// Suggestion for an event, matched against its detail text.
    ///
    /// Every kind is matched the same way; the check is purely textual.
    #[must_use]
    pub fn classify(&self, event: &Event) -> Option<&str> {
        self.classify_text(&event.detail)
    }

    /// Suggestion for arbitrary text.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Option<&str> {
        self.matching_issue(text).map(|issue| issue.suggestion.as_str())
    }

    /// The first registered signature whose pattern occurs in `text`.
    #[must_use]
    pub fn matching_issue(&self, text: &str) -> Option<&KnownIssue> {
        if self.signatures.is_empty() {
            return None;
        }
        let haystack = text.to_lowercase();
        self.signatures
            .iter()
            .find(|signature| haystack.contains(&signature.needle))
            .map(|signature| &signature.issue)
    }

    /// Registered signatures in match order.
    pub fn issues(&self) -> impl Iterator<Item = &KnownIssue> + '_ {
        self.signatures.iter().map(|signature| &signature.issue)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for IssueClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<KnownIssue> for IssueClassifier {
    fn from_iter<I: IntoIterator<Item = KnownIssue>>(iter: I) -> Self {
        Self::new(iter)
    }
}
