//! Hotkey CLI commands.

use clap::Subcommand;

use super::types::{CliLayoutShortcut, CliScheme, CliWindowAction};
use crate::cli::session::Session;
use crate::error::TesseraError;
use crate::settings::{Direction, HotkeyCommand, Modifiers, Shortcut};

/// Hotkey commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum HotkeyCommands {
    /// Choose which keys map to directions.
    Scheme {
        #[arg(value_enum)]
        scheme: CliScheme,
    },

    /// Set the direction keys used by the `custom` scheme.
    Keys {
        #[arg(long)]
        north: Option<String>,
        #[arg(long)]
        south: Option<String>,
        #[arg(long)]
        east: Option<String>,
        #[arg(long)]
        west: Option<String>,
    },

    /// Set the modifiers held for focus, swap or resize.
    #[command(after_long_help = r"Examples:
  tessera hotkey modifiers focus alt
  tessera hotkey modifiers swap shift+alt
  tessera hotkey modifiers resize 'ctrl + alt'")]
    Modifiers {
        #[arg(value_enum)]
        action: CliWindowAction,
        /// `+`-separated modifiers: cmd, ctrl, alt, shift.
        modifiers: Modifiers,
    },

    /// Set the resize increment, in points.
    ResizeStep { points: u32 },

    /// Bind a layout shortcut.
    #[command(after_long_help = r"Examples:
  tessera hotkey bind bsp 'shift + alt - b'
  tessera hotkey bind gaps cmd+alt+g")]
    Bind {
        #[arg(value_enum)]
        target: CliLayoutShortcut,
        shortcut: Shortcut,
    },

    /// Remove a layout shortcut.
    Unbind {
        #[arg(value_enum)]
        target: CliLayoutShortcut,
    },
}

/// Translates a hotkey command into settings commands.
///
/// # Errors
///
/// Returns `InvalidArguments` when `keys` is given no key.
pub fn to_commands(cmd: &HotkeyCommands) -> Result<Vec<HotkeyCommand>, TesseraError> {
    let commands = match cmd {
        HotkeyCommands::Scheme { scheme } => vec![HotkeyCommand::SetScheme((*scheme).into())],
        HotkeyCommands::Keys { north, south, east, west } => [
            (Direction::North, north),
            (Direction::South, south),
            (Direction::East, east),
            (Direction::West, west),
        ]
        .into_iter()
        .filter_map(|(direction, key)| {
            key.as_ref().map(|key| HotkeyCommand::SetCustomKey(direction, key.clone()))
        })
        .collect(),
        HotkeyCommands::Modifiers { action, modifiers } => vec![match action {
            CliWindowAction::Focus => HotkeyCommand::SetFocusModifiers(*modifiers),
            CliWindowAction::Swap => HotkeyCommand::SetSwapModifiers(*modifiers),
            CliWindowAction::Resize => HotkeyCommand::SetResizeModifiers(*modifiers),
        }],
        HotkeyCommands::ResizeStep { points } => vec![HotkeyCommand::SetResizeStep(*points)],
        HotkeyCommands::Bind { target, shortcut } => {
            vec![HotkeyCommand::SetLayoutShortcut((*target).into(), Some(shortcut.clone()))]
        }
        HotkeyCommands::Unbind { target } => {
            vec![HotkeyCommand::SetLayoutShortcut((*target).into(), None)]
        }
    };

    if commands.is_empty() {
        return Err(TesseraError::InvalidArguments(
            "Nothing to change. Pass at least one of --north, --south, --east, --west.".to_string(),
        ));
    }

    Ok(commands)
}

/// Execute hotkey subcommands.
///
/// # Errors
///
/// Returns an error if the arguments are empty or the snapshot cannot be saved.
pub fn execute(cmd: &HotkeyCommands, session: &mut Session) -> Result<(), TesseraError> {
    session.apply(to_commands(cmd)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LayoutShortcut;

    #[test]
    fn test_keys_in_direction_order() {
        let commands = to_commands(&HotkeyCommands::Keys {
            north: Some("w".to_string()),
            south: None,
            east: None,
            west: Some("a".to_string()),
        })
        .unwrap();

        assert_eq!(
            commands,
            vec![
                HotkeyCommand::SetCustomKey(Direction::North, "w".to_string()),
                HotkeyCommand::SetCustomKey(Direction::West, "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_keys_without_values_is_rejected() {
        let result = to_commands(&HotkeyCommands::Keys {
            north: None,
            south: None,
            east: None,
            west: None,
        });
        assert!(matches!(result, Err(TesseraError::InvalidArguments(_))));
    }

    #[test]
    fn test_unbind_clears_shortcut() {
        let commands = to_commands(&HotkeyCommands::Unbind { target: CliLayoutShortcut::Gaps }).unwrap();
        assert_eq!(commands, vec![HotkeyCommand::SetLayoutShortcut(LayoutShortcut::Gaps, None)]);
    }
}
