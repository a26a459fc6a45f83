//! Command line interface for Tessera.
//!
//! Each invocation opens a [`session::Session`] over the settings home,
//! applies one command through the store and exits. Edits are saved as part
//! of the same dispatch; config scripts are only written by `export`.

pub mod commands;
pub mod output;
pub mod session;

use clap::Parser;
pub use commands::Cli;

use crate::error::TesseraError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), TesseraError> {
    let cli = Cli::parse();
    cli.execute()
}
