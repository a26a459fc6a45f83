//! Config CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use colored::Colorize;

use crate::config::config_paths;
use crate::config::template::{create_config_file, generate_config_template};
use crate::error::TesseraError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  tessera config init              # Create config at default location
  tessera config init --force      # Overwrite existing config
  tessera config init --path ~/my-config.jsonc  # Create at custom path
  tessera config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses the first search path.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show where Tessera looks for its configuration file.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be created.
pub fn execute(cmd: &ConfigCommands) -> Result<(), TesseraError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                print!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone()).map(|created| {
                    println!("Configuration file created at: {}", created.display());
                    println!("\nAll options are commented out by default.");
                })
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Writes the template, returning the path written.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<PathBuf, TesseraError> {
    let config_path = custom_path
        .or_else(|| config_paths().into_iter().next())
        .unwrap_or_else(|| PathBuf::from("config.jsonc"));

    if config_path.exists() && !force {
        return Err(TesseraError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        TesseraError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    Ok(config_path)
}

fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;
    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)".green().to_string()
        } else if exists {
            " (exists)".dimmed().to_string()
        } else {
            String::new()
        };

        println!("  {}. {}{marker}", i + 1, path.display());
    }

    if !found_config {
        println!("\nNo configuration file found. Defaults are in use.");
        println!("Run 'tessera config init' to create one.");
    }
}
