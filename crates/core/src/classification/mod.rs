//! Known-issue classification
//!
//! Maps event text to remediation hints using an ordered registry of
//! [`KnownIssue`] signatures. The registry is plain configuration: adding a
//! signature never touches the interceptor or the log.

mod issue_classifier;

pub use issue_classifier::IssueClassifier;
#[doc(no_inline)]
pub use querytap_domain::KnownIssue;
