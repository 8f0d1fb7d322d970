//! Configuration loading and management
//!
//! This module provides utilities for loading [`TapConfig`] from files and
//! environment variables.
//!
//! [`TapConfig`]: querytap_domain::TapConfig

pub mod loader;

// Re-export commonly used items
pub use loader::{apply_env_overrides, load, load_from_file, parse_config, probe_config_paths};
