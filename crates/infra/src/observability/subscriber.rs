use querytap_domain::{LoggingConfig, QueryTapError, Result};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `config.filter`.
///
/// Returns `Ok(false)` when a global subscriber is already installed, which
/// makes repeated calls (tests, embedded hosts) harmless.
///
/// # Errors
/// Returns `QueryTapError::Config` if the filter directive does not parse.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|e| {
        QueryTapError::Config(format!("Invalid log filter '{}': {e}", config.filter))
    })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    match installed {
        Ok(()) => {
            tracing::debug!(filter = %config.filter, json = config.json, "tracing initialised");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "tracing subscriber already installed");
            Ok(false)
        }
    }
}
