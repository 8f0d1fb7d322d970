//! # QueryTap Infrastructure
//!
//! Everything that touches the process environment.
//!
//! This crate contains:
//! - Configuration loading (`.env`, TOML/JSON files, environment overrides)
//! - `tracing` subscriber setup and the [`TracingSink`] event mirror
//! - Concrete dashboard renderers (plain text, HTML)
//! - The [`TapContext`] composition root
//!
//! ## Architecture
//! - Implements traits defined in `querytap-core`
//! - Depends on `querytap-domain` and `querytap-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod context;
pub mod observability;
pub mod render;

// Re-export commonly used items
pub use context::TapContext;
pub use observability::{init_tracing, TracingSink};
pub use render::{HtmlRenderer, PlainTextRenderer};
