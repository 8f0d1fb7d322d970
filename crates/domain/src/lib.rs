//! # QueryTap Domain
//!
//! Plain data types shared by the interception layer and its consumers.
//!
//! This crate contains:
//! - Instrumentation events and their kinds
//! - Call arguments captured at the proxy boundary
//! - Known-issue signatures
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - Depends only on `querytap-common`
//! - No locking, I/O or async code

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::text::describe;
