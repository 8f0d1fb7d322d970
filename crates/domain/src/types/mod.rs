//! Domain types and models

pub mod args;
pub mod event;
pub mod issue;

pub use args::ExecArgs;
pub use event::{Event, EventKind};
pub use issue::KnownIssue;
