//! CLI command definitions using Clap.
//!
//! Commands are organized into domain-specific submodules:
//!
//! - `window` - `yabai` window layout setters
//! - `hotkey` - `skhd` hotkey setters
//! - `animations` - macOS animation switch
//! - `config_cmd` - configuration file management
//! - `types` - shared argument types

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize;

use super::output::{PathRow, format_bool, paths_table, print_highlighted_json, settings_table};
use super::session::Session;
use crate::config::{self, LoadedConfig};
use crate::error::TesseraError;
use crate::settings::{AnimationCommand, Binding, Domain, HotkeyCommand, WindowLayoutCommand};
use crate::store::RootCommand;
use crate::{logging, schema};

pub mod animations;
pub mod config_cmd;
pub mod hotkey;
pub mod types;
pub mod window;

pub use animations::AnimationCommands;
pub use config_cmd::ConfigCommands;
pub use hotkey::HotkeyCommands;
use types::{CliDomain, domains, parse_binding_value};
pub use window::WindowCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tessera - edit yabai, skhd and macOS animation settings and generate their config files.
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Directory holding the snapshots and generated scripts.
    ///
    /// Overrides `home` from the configuration file.
    #[arg(long, global = true, value_name = "DIR", env = "TESSERA_HOME")]
    pub home: Option<String>,

    /// Log at debug level (overridden by `TESSERA_LOG`).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Show current settings.
    ///
    /// Without a domain, shows every domain.
    Show {
        #[arg(value_enum)]
        domain: Option<CliDomain>,

        /// Print the JSON snapshot instead of a table.
        #[arg(long, conflicts_with = "script")]
        json: bool,

        /// Print the config script that `export` would write.
        #[arg(long)]
        script: bool,
    },

    /// List snapshot and config file locations.
    Paths,

    /// Window layout settings (yabai).
    #[command(subcommand)]
    Window(WindowCommands),

    /// Hotkey settings (skhd).
    #[command(subcommand)]
    Hotkey(HotkeyCommands),

    /// macOS animation settings.
    #[command(subcommand)]
    Animations(AnimationCommands),

    /// Set any field by its snapshot path.
    #[command(after_long_help = r#"Examples:
  tessera set window-layout windowGap 12
  tessera set window-layout activeWindowBorderColor.alpha 200
  tessera set hotkey scheme vim
  tessera set hotkey toggleBsp '{"modifiers": {"alt": true}, "key": "b"}'"#)]
    Set {
        #[arg(value_enum)]
        domain: CliDomain,
        /// Dot-separated camelCase field path.
        path: String,
        /// New value, as JSON. Bare words are treated as strings.
        value: String,
    },

    /// Reload settings from the snapshot files.
    ///
    /// Without a domain, reloads every domain.
    Load {
        #[arg(value_enum)]
        domain: Option<CliDomain>,
    },

    /// Write config scripts from the current settings.
    ///
    /// Without a domain, exports every domain.
    Export {
        #[arg(value_enum)]
        domain: Option<CliDomain>,
    },

    /// Output a JSON Schema.
    ///
    /// With a domain, describes its snapshot file; without, describes the
    /// configuration file.
    Schema {
        #[arg(value_enum)]
        domain: Option<CliDomain>,
    },

    /// Configuration file management commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(tessera completions --shell zsh)"
    ///   tessera completions --shell fish > ~/.config/fish/completions/tessera.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_deref().map(crate::platform::expand) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the arguments
    /// are invalid, or a save, load or export fails.
    pub fn execute(&self) -> Result<(), TesseraError> {
        let loaded = config::load(self.config_path().as_deref())?;
        logging::init(self.verbose, &loaded.config.log_level);
        if let Some(warning) = &loaded.warning {
            tracing::warn!(%warning, "configuration file ignored");
        }
        if let Some(path) = &loaded.path {
            tracing::debug!(path = %path.display(), "loaded configuration");
        }

        match &self.command {
            Commands::Config(cmd) => config_cmd::execute(cmd),
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
            Commands::Schema { domain } => {
                let schema = domain.map_or_else(schema::config_schema, |d| {
                    schema::snapshot_schema(d.into())
                });
                println!("{}", schema::to_json(&schema));
                Ok(())
            }
            command => {
                let mut session = self.open_session(&loaded);
                Self::execute_with_session(command, &mut session)
            }
        }
    }

    fn open_session(&self, loaded: &LoadedConfig) -> Session {
        Session::open(self.home.as_deref(), &loaded.config)
    }

    fn execute_with_session(command: &Commands, session: &mut Session) -> Result<(), TesseraError> {
        match command {
            Commands::Show { domain, json, script } => {
                show(session, &domains(*domain), *json, *script)
            }
            Commands::Paths => {
                show_paths(session);
                Ok(())
            }
            Commands::Window(cmd) => window::execute(cmd, session),
            Commands::Hotkey(cmd) => hotkey::execute(cmd, session),
            Commands::Animations(cmd) => animations::execute(cmd, session),
            Commands::Set { domain, path, value } => set(session, (*domain).into(), path, value),
            Commands::Load { domain } => {
                let targets = domains(*domain);
                session.apply(targets.iter().map(|d| RootCommand::load(*d)))?;
                for target in targets {
                    let route = session.store().routes().route(target);
                    println!("{} {target} from {}", "Loaded".green(), route.snapshot_path.display());
                }
                Ok(())
            }
            Commands::Export { domain } => {
                let targets = domains(*domain);
                session.apply(targets.iter().map(|d| RootCommand::export(*d)))?;
                for target in targets {
                    let route = session.store().routes().route(target);
                    println!("{} {target} to {}", "Exported".green(), route.config_path.display());
                }
                Ok(())
            }
            Commands::Config(_) | Commands::Completions { .. } | Commands::Schema { .. } => Ok(()),
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "tessera", &mut io::stdout());
    }
}

fn show(session: &Session, targets: &[Domain], json: bool, script: bool) -> Result<(), TesseraError> {
    let state = session.store().state();

    for (i, domain) in targets.iter().copied().enumerate() {
        if script {
            print!("{}", state.config_script(domain));
            continue;
        }

        let snapshot = state.snapshot_value(domain)?;
        if json {
            print_highlighted_json(&snapshot);
        } else {
            if i > 0 {
                println!();
            }
            println!("{}", domain.as_str().bold());
            println!("{}", settings_table(&snapshot));
        }
    }

    Ok(())
}

fn show_paths(session: &Session) {
    let routes = session.store().routes();
    let rows = Domain::ALL
        .into_iter()
        .map(|domain| {
            let route = routes.route(domain);
            PathRow {
                domain: domain.to_string(),
                saved: format_bool(route.snapshot_path.is_file()),
                snapshot: route.snapshot_path.display().to_string(),
                exported: format_bool(route.config_path.is_file()),
                config: route.config_path.display().to_string(),
            }
        })
        .collect();

    println!("{}", paths_table(rows));
}

fn set(session: &mut Session, domain: Domain, path: &str, raw: &str) -> Result<(), TesseraError> {
    if path.trim().is_empty() {
        return Err(TesseraError::InvalidArguments("Field path must not be empty".to_string()));
    }

    let binding = Binding::new(path, parse_binding_value(raw));
    let before = session.store().state().clone();

    let command = match domain {
        Domain::WindowLayout => RootCommand::WindowLayout(WindowLayoutCommand::Bind(binding)),
        Domain::Hotkey => RootCommand::Hotkey(HotkeyCommand::Bind(binding)),
        Domain::Animation => RootCommand::Animation(AnimationCommand::Bind(binding)),
    };
    session.apply([command])?;

    let after = session.store().state();
    let changed = match domain {
        Domain::WindowLayout => before.window_layout != after.window_layout,
        Domain::Hotkey => before.hotkey != after.hotkey,
        Domain::Animation => before.animation != after.animation,
    };
    if !changed {
        eprintln!(
            "{} {domain} settings unchanged: '{path}' is unknown, rejected {raw}, or already had that value",
            "warning:".yellow().bold()
        );
    }

    Ok(())
}
