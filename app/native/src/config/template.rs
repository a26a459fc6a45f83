//! Configuration template generation.

use std::fs;
use std::path::Path;

/// Generates a configuration template with every option commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Tessera Configuration File
// ===========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // Directory holding the state snapshots (YabaiState.json, SKHDState.json,
  // AnimationState.json) and the generated scripts (.yabairc, .skhdrc,
  // .animationSettingsRC.sh). Defaults to your home directory.
  // "home": "~",

  // Load existing snapshots when Tessera starts.
  // "autoload": true,

  // Log level used when TESSERA_LOG is not set:
  // "error", "warn", "info", "debug" or "trace".
  // "logLevel": "warn"
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::{TesseraConfig, load_config_from_path};

    #[test]
    fn test_template_mentions_every_option() {
        let template = generate_config_template();
        assert!(template.contains("\"home\""));
        assert!(template.contains("\"autoload\""));
        assert!(template.contains("\"logLevel\""));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tessera").join("config.jsonc");

        create_config_file(&path).unwrap();

        let (config, _) = load_config_from_path(&path).unwrap();
        assert_eq!(config, TesseraConfig::default());
    }
}
