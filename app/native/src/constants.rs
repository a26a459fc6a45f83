//! Application-wide constants.

/// Application name, used for config directories and log targets.
pub const APP_NAME: &str = "tessera";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "TESSERA_LOG";

/// Base URL for the published JSON schemas.
pub const SCHEMA_BASE_URL: &str = "https://raw.githubusercontent.com/tessera-wm/tessera/main/schemas";
