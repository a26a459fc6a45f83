//! Animation CLI commands.

use clap::Subcommand;

use crate::cli::session::Session;
use crate::error::TesseraError;
use crate::settings::AnimationCommand;

/// Animation commands.
#[derive(Subcommand, Debug)]
pub enum AnimationCommands {
    /// Restore the stock macOS animations.
    Enable,
    /// Disable or shorten macOS animations.
    Disable,
    /// Flip between enabled and disabled.
    Toggle,
}

impl From<&AnimationCommands> for AnimationCommand {
    fn from(cmd: &AnimationCommands) -> Self {
        match cmd {
            AnimationCommands::Enable => Self::SetAllEnabled(true),
            AnimationCommands::Disable => Self::SetAllEnabled(false),
            AnimationCommands::Toggle => Self::Toggle,
        }
    }
}

/// Execute animation subcommands.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be saved.
pub fn execute(cmd: &AnimationCommands, session: &mut Session) -> Result<(), TesseraError> {
    session.apply([AnimationCommand::from(cmd)])
}
