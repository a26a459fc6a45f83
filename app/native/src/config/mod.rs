//! Application configuration.
//!
//! Tessera reads an optional JSONC file (JSON with `//` and `/* */`
//! comments) that says where the settings home is and how to start up. A
//! missing file means defaults; an unreadable one is reported and ignored
//! unless it was named explicitly with `--config`.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};

pub use types::{ConfigError, TesseraConfig, config_paths, load_config_from_path};

/// A configuration and the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: TesseraConfig,
    /// `None` when no file was found and defaults are in use.
    pub path: Option<PathBuf>,
    /// Why a file found on the search path was ignored.
    ///
    /// Reported by the caller once logging is set up.
    pub warning: Option<String>,
}

/// Loads the configuration.
///
/// With `custom`, that file must exist and parse. Otherwise the search paths
/// are tried in order; if none exists, or the first one found is invalid,
/// defaults are used and [`LoadedConfig::warning`] says why.
///
/// # Errors
///
/// Returns an error only when `custom` is given and cannot be loaded.
pub fn load(custom: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = custom {
        let (config, path) = load_config_from_path(path)?;
        return Ok(LoadedConfig { config, path: Some(path), warning: None });
    }

    Ok(load_first(&config_paths()))
}

/// Loads the first existing file among `paths`.
fn load_first(paths: &[PathBuf]) -> LoadedConfig {
    let Some(path) = paths.iter().find(|path| path.exists()) else {
        return LoadedConfig::default();
    };

    match load_config_from_path(path) {
        Ok((config, path)) => LoadedConfig { config, path: Some(path), warning: None },
        Err(err) => LoadedConfig {
            warning: Some(format!("{}: {err}; using defaults", path.display())),
            ..LoadedConfig::default()
        },
    }
}
