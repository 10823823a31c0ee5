//! App-wide constants.
//!
//! Centralises the tool name, the default endpoint and filter, config paths,
//! and environment variable names so a rename only requires changing this file.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userfetch";

/// Crate version, as reported by `--version` and the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Endpoint queried when no override is configured.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// City prefix applied when no override is configured.
pub const DEFAULT_CITY_PREFIX: &str = "S";

/// Upper bound on the single GET request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder printed for any field missing from a record.
pub const NOT_AVAILABLE: &str = "N/A";

/// Local config filename (e.g. `.userfetch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userfetch.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userfetch";

/// `User-Agent` header sent with the request.
pub fn user_agent() -> String {
    format!("{APP_NAME}/{VERSION}")
}

// ── Environment variable names ──────────────────────────────────────

pub const ENV_URL: &str = "USERFETCH_URL";
pub const ENV_FILTER: &str = "USERFETCH_FILTER";
