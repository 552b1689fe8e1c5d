use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Health Support";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the hosted prediction services (one endpoint per domain below it).
pub const DEFAULT_API_BASE: &str = "https://cts-vibeappso4912-2.azurewebsites.net/api";

/// Request timeout for prediction calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Overrides `DEFAULT_API_BASE`.
pub const API_BASE_ENV: &str = "HEALTH_SUPPORT_API_BASE";

/// Enables the diagnostic dump when set (see `pipeline::diagnostic`).
pub const DUMP_DIR_ENV: &str = "HEALTH_SUPPORT_DUMP_DIR";

/// Prediction service base URL: `HEALTH_SUPPORT_API_BASE` if set and non-empty,
/// otherwise the hosted default.
pub fn api_base() -> String {
    resolve_api_base(std::env::var(API_BASE_ENV).ok())
}

fn resolve_api_base(from_env: Option<String>) -> String {
    from_env
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Diagnostic dump base directory, `None` unless `HEALTH_SUPPORT_DUMP_DIR` is set.
pub fn dump_dir() -> Option<PathBuf> {
    std::env::var_os(DUMP_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Default `EnvFilter` directive when neither `RUST_LOG` nor a CLI level is given.
pub fn default_log_filter() -> &'static str {
    "health_support_lib=info,health_support=info"
}

/// Filter directive for an explicit level, scoped to this crate's targets.
pub fn log_filter_for(level: &str) -> String {
    format!("health_support_lib={level},health_support={level}")
}
