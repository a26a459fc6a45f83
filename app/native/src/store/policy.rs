//! Follow-up rules evaluated after every dispatched command.

use super::root::{PersistCommand, RootCommand};
use crate::settings::Domain;

/// Decides whether a dispatched command triggers another one.
pub trait Policy {
    /// Returns the command to dispatch after `command`, if any.
    fn follow_up(&self, command: &RootCommand) -> Option<RootCommand>;
}

/// Saves a domain's snapshot after every edit to that domain.
///
/// Persistence commands produce no follow-up, so a dispatch always settles
/// after at most two steps. Export is never triggered automatically.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistAfterEdit;

impl Policy for PersistAfterEdit {
    fn follow_up(&self, command: &RootCommand) -> Option<RootCommand> {
        let domain = match command {
            RootCommand::WindowLayout(_) => Domain::WindowLayout,
            RootCommand::Hotkey(_) => Domain::Hotkey,
            RootCommand::Animation(_) => Domain::Animation,
            RootCommand::Persist(_) => return None,
        };

        Some(RootCommand::Persist(PersistCommand::Save(domain)))
    }
}

/// Never dispatches a follow-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFollowUp;

impl Policy for NoFollowUp {
    fn follow_up(&self, _command: &RootCommand) -> Option<RootCommand> { None }
}
