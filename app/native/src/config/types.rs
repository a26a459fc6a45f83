//! Application configuration types and loading.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::APP_NAME;

/// Tessera application configuration.
///
/// Loaded from a JSONC file; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TesseraConfig {
    /// Directory holding the snapshots and generated scripts.
    /// Supports `~`. Defaults to the user's home directory.
    pub home: Option<String>,

    /// Load existing snapshots at start-up.
    pub autoload: bool,

    /// Log filter used when `TESSERA_LOG` is unset (`error`, `warn`, `info`,
    /// `debug`, `trace`, or a full `tracing` directive).
    pub log_level: String,
}

impl Default for TesseraConfig {
    fn default() -> Self {
        Self {
            home: None,
            autoload: true,
            log_level: "warn".to_string(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/tessera/config.jsonc, the platform \
         config directory, or ~/.tessera.jsonc"
    )]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".tessera.jsonc", ".tessera.json"];

fn push_unique(paths: &mut Vec<PathBuf>, dir: &Path) {
    for filename in CONFIG_FILE_NAMES {
        let path = dir.join(filename);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
}

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/tessera/config.jsonc` (or `.json`), when the variable is set
/// 2. `~/.config/tessera/config.jsonc` (or `.json`)
/// 3. the platform config directory, e.g. `~/Library/Application Support/tessera/`
/// 4. `~/.tessera.jsonc` or `~/.tessera.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.trim().is_empty()
    {
        push_unique(&mut paths, &PathBuf::from(xdg_config).join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        push_unique(&mut paths, &home.join(".config").join(APP_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_unique(&mut paths, &config_dir.join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// Comments (`//` and `/* */`) are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if `path` does not exist, `IoError` if it
/// cannot be read and `ParseError` if it is not valid JSONC.
pub fn load_config_from_path(path: &Path) -> Result<(TesseraConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: TesseraConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = TesseraConfig::default();
        assert!(config.home.is_none());
        assert!(config.autoload);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_paths_are_not_empty() {
        let paths = config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("tessera")));
    }

    #[test]
    fn test_load_config_strips_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // where the dotfiles live
                "home": "~/dotfiles",
                /* start clean */
                "autoload": false
            }"#,
        )
        .unwrap();

        let (config, loaded_from) = load_config_from_path(&path).unwrap();
        assert_eq!(config.home.as_deref(), Some("~/dotfiles"));
        assert!(!config.autoload);
        assert_eq!(config.log_level, "warn");
        assert_eq!(loaded_from, path);
    }

    #[test]
    fn test_load_missing_config_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("missing.jsonc"));
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_invalid_config_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "autoload": "sometimes" }"#).unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse configuration file"));
    }
}
