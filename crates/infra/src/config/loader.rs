//! Configuration loader
//!
//! Builds a validated [`TapConfig`] from files and the environment.
//!
//! ## Loading Strategy
//! 1. Reads `.env` from the working directory if one exists
//! 2. Loads the file named by `QUERYTAP_CONFIG`, or the first probed file
//! 3. Falls back to [`TapConfig::default`] when no file is found
//! 4. Applies environment overrides
//! 5. Validates the result
//!
//! ## Environment Variables
//! - `QUERYTAP_CONFIG`: Explicit config file path
//! - `QUERYTAP_LOG_CAPACITY`: Event log capacity
//! - `QUERYTAP_DASHBOARD_WINDOW`: Dashboard window size
//! - `QUERYTAP_LOG_FILTER`: `tracing` filter directive
//! - `QUERYTAP_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./querytap.toml` or `./querytap.json` (current working directory)
//! 2. `./config/querytap.toml` or `./config/querytap.json`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use querytap_domain::{QueryTapError, Result, TapConfig};

const CONFIG_PATH_VAR: &str = "QUERYTAP_CONFIG";
const LOG_CAPACITY_VAR: &str = "QUERYTAP_LOG_CAPACITY";
const DASHBOARD_WINDOW_VAR: &str = "QUERYTAP_DASHBOARD_WINDOW";
const LOG_FILTER_VAR: &str = "QUERYTAP_LOG_FILTER";
const LOG_JSON_VAR: &str = "QUERYTAP_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["querytap.toml", "querytap.json", "config/querytap.toml", "config/querytap.json"];

/// Load configuration with the full fallback strategy
///
/// A missing config file is not an error: defaults are used and the
/// environment can still override them.
///
/// # Errors
/// Returns `QueryTapError::Io` if a config file exists but cannot be read,
/// and `QueryTapError::Config` if:
/// - `QUERYTAP_CONFIG` points at a missing file
/// - A config file cannot be parsed
/// - An override variable holds an invalid value
/// - The final configuration fails validation
pub fn load() -> Result<TapConfig> {
    load_dotenv();

    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_from_file(Some(PathBuf::from(path)))?,
        Err(_) => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                TapConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    tracing::info!(
        capacity = config.event_log.capacity,
        window = config.dashboard.window,
        known_issues = config.known_issues.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `QueryTapError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
///
/// Returns `QueryTapError::Io` if the file exists but cannot be read.
pub fn load_from_file(path: Option<PathBuf>) -> Result<TapConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(QueryTapError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            QueryTapError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by the extension of `path` (`.json` or `.toml`);
/// files without an extension are read as JSON.
///
/// # Errors
/// Returns `QueryTapError::Config` if the format is unsupported or parsing
/// fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<TapConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| QueryTapError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| QueryTapError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(QueryTapError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Apply `QUERYTAP_*` overrides from the process environment.
///
/// # Errors
/// Returns `QueryTapError::Config` if a numeric override does not parse.
pub fn apply_env_overrides(config: &mut TapConfig) -> Result<()> {
    apply_overrides_with(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// Split out from [`apply_env_overrides`] so callers can feed overrides
/// from somewhere other than the process environment.
///
/// # Errors
/// Returns `QueryTapError::Config` if a numeric override does not parse.
pub fn apply_overrides_with<F>(config: &mut TapConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(capacity) = lookup(LOG_CAPACITY_VAR) {
        config.event_log.capacity = parse_usize(LOG_CAPACITY_VAR, &capacity)?;
    }
    if let Some(window) = lookup(DASHBOARD_WINDOW_VAR) {
        config.dashboard.window = parse_usize(DASHBOARD_WINDOW_VAR, &window)?;
    }
    if let Some(filter) = lookup(LOG_FILTER_VAR) {
        config.logging.filter = filter;
    }
    if let Some(json) = lookup(LOG_JSON_VAR) {
        config.logging.json = parse_bool(&json);
    }
    Ok(())
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| QueryTapError::Config(format!("Invalid value for {key}: {e}")))
}

/// Accepts: `1`, `true`, `yes`, `on` (case-insensitive); anything else is
/// `false`.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_bool_parsing() {
        for truthy in ["1", "true", "yes", "on", "TRUE", " On "] {
            assert!(parse_bool(truthy), "{truthy} should be true");
        }
        for falsy in ["0", "false", "no", "off", "maybe", ""] {
            assert!(!parse_bool(falsy), "{falsy} should be false");
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = TapConfig::default();
        let lookup = lookup_from(&[
            (LOG_CAPACITY_VAR, "250"),
            (DASHBOARD_WINDOW_VAR, "30"),
            (LOG_FILTER_VAR, "querytap_core=debug"),
            (LOG_JSON_VAR, "yes"),
        ]);

        apply_overrides_with(&mut config, lookup).unwrap();

        assert_eq!(config.event_log.capacity, 250);
        assert_eq!(config.dashboard.window, 30);
        assert_eq!(config.logging.filter, "querytap_core=debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_absent_overrides_leave_config_untouched() {
        let mut config = TapConfig::default();
        apply_overrides_with(&mut config, |_| None).unwrap();
        assert_eq!(config, TapConfig::default());
    }

    #[test]
    fn test_invalid_number_override() {
        let mut config = TapConfig::default();
        let result =
            apply_overrides_with(&mut config, lookup_from(&[(LOG_CAPACITY_VAR, "lots")]));

        let err = result.unwrap_err();
        assert!(matches!(err, QueryTapError::Config(_)), "Should be a Config error");
        assert!(err.to_string().contains(LOG_CAPACITY_VAR));

        // Parses as a number, but validation must still refuse it.
        let huge = usize::MAX.to_string();
        apply_overrides_with(&mut config, lookup_from(&[(LOG_CAPACITY_VAR, huge.as_str())]))
            .unwrap();
        assert_eq!(config.event_log.capacity, usize::MAX);
        assert!(matches!(config.validate(), Err(QueryTapError::Config(_))));
    }

    #[test]
    fn test_env_overrides_read_process_environment() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(DASHBOARD_WINDOW_VAR, "42");
        let mut config = TapConfig::default();
        let result = apply_env_overrides(&mut config);
        std::env::remove_var(DASHBOARD_WINDOW_VAR);

        assert!(result.is_ok());
        assert_eq!(config.dashboard.window, 42);
    }

    #[test]
    fn test_parse_config_by_extension() {
        let toml_config =
            parse_config("[event_log]\ncapacity = 64\n", Path::new("querytap.toml")).unwrap();
        assert_eq!(toml_config.event_log.capacity, 64);

        let json_config =
            parse_config(r#"{"dashboard": {"window": 12}}"#, Path::new("querytap.json")).unwrap();
        assert_eq!(json_config.dashboard.window, 12);
        assert_eq!(json_config.event_log, TapConfig::default().event_log);

        let unknown = parse_config("", Path::new("querytap.yaml"));
        assert!(matches!(unknown, Err(QueryTapError::Config(_))));
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config("[event_log\ncapacity = ", Path::new("querytap.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid TOML format"));
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "event_log": { "capacity": 500 },
            "logging": { "filter": "warn", "json": true }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.event_log.capacity, 500);
        assert_eq!(config.logging.filter, "warn");
        assert!(config.logging.json);
        assert_eq!(config.known_issues.len(), 2);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_unreadable_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("querytap.toml");
        std::fs::create_dir(&path).unwrap();

        let result = load_from_file(Some(path));
        assert!(matches!(result, Err(QueryTapError::Io(_))), "got {result:?}");
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/querytap.toml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }
}
