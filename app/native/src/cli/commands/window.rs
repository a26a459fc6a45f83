//! Window layout CLI commands.
//!
//! Typed setters for the `yabai` settings. Every change is saved to
//! `YabaiState.json` immediately; run `tessera export window-layout` to
//! regenerate `.yabairc`.

use clap::Subcommand;

use super::types::{CliFocusMode, CliLayout, CliPlacement, CliShadow, Switch};
use crate::cli::session::Session;
use crate::error::TesseraError;
use crate::settings::{Color, WindowLayoutCommand};

/// Window layout commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum WindowCommands {
    /// Set the space layout.
    Layout {
        #[arg(value_enum)]
        layout: CliLayout,
    },

    /// Set the gap between tiled windows, in points.
    Gap { points: u32 },

    /// Set space padding, in points.
    #[command(after_long_help = r"Examples:
  tessera window padding 10               # All four sides
  tessera window padding --top 30         # Top only
  tessera window padding 8 --bottom 0     # All sides, then override bottom")]
    Padding {
        /// Padding applied to every side.
        all: Option<u32>,
        #[arg(long)]
        top: Option<u32>,
        #[arg(long)]
        bottom: Option<u32>,
        #[arg(long)]
        left: Option<u32>,
        #[arg(long)]
        right: Option<u32>,
    },

    /// Set where new windows are inserted.
    Placement {
        #[arg(value_enum)]
        placement: CliPlacement,
    },

    /// Keep the split tree balanced automatically.
    Balance {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Set the default split ratio (0.1 to 0.9).
    SplitRatio { ratio: f64 },

    /// Set the window shadow mode.
    Shadow {
        #[arg(value_enum)]
        mode: CliShadow,
    },

    /// Keep floating windows on top.
    Topmost {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Configure window opacity.
    Opacity {
        /// Enable or disable opacity effects.
        #[arg(value_enum)]
        state: Option<Switch>,
        /// Opacity of the focused window (0.0 to 1.0).
        #[arg(long)]
        active: Option<f64>,
        /// Opacity of unfocused windows (0.0 to 1.0).
        #[arg(long)]
        normal: Option<f64>,
        /// Fade duration in seconds.
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Configure window borders.
    #[command(after_long_help = r"Examples:
  tessera window border on --width 6
  tessera window border --active-color '#b4befe' --normal-color 0x80585b70")]
    Border {
        /// Enable or disable borders.
        #[arg(value_enum)]
        state: Option<Switch>,
        /// Border width in points.
        #[arg(long)]
        width: Option<u32>,
        /// Border color of the focused window (#RGB, #RRGGBB, #AARRGGBB or 0xAARRGGBB).
        #[arg(long, value_name = "COLOR")]
        active_color: Option<Color>,
        /// Border color of unfocused windows.
        #[arg(long, value_name = "COLOR")]
        normal_color: Option<Color>,
    },

    /// Configure mouse and focus interaction.
    Focus {
        /// Move the pointer to the focused window.
        #[arg(long, value_enum, value_name = "STATE")]
        mouse_follows_focus: Option<Switch>,
        /// Focus the window under the pointer.
        #[arg(long, value_enum, value_name = "MODE")]
        focus_follows_mouse: Option<CliFocusMode>,
    },
}

/// Translates a window command into settings commands.
///
/// # Errors
///
/// Returns `InvalidArguments` when a command that takes optional settings is
/// given none.
pub fn to_commands(cmd: &WindowCommands) -> Result<Vec<WindowLayoutCommand>, TesseraError> {
    let commands = match cmd {
        WindowCommands::Layout { layout } => vec![WindowLayoutCommand::SetLayout((*layout).into())],
        WindowCommands::Gap { points } => vec![WindowLayoutCommand::SetWindowGap(*points)],
        WindowCommands::Padding { all, top, bottom, left, right } => {
            let mut commands: Vec<_> =
                all.iter().map(|value| WindowLayoutCommand::SetPadding(*value)).collect();
            commands.extend(top.map(WindowLayoutCommand::SetPaddingTop));
            commands.extend(bottom.map(WindowLayoutCommand::SetPaddingBottom));
            commands.extend(left.map(WindowLayoutCommand::SetPaddingLeft));
            commands.extend(right.map(WindowLayoutCommand::SetPaddingRight));
            commands
        }
        WindowCommands::Placement { placement } => {
            vec![WindowLayoutCommand::SetWindowPlacement((*placement).into())]
        }
        WindowCommands::Balance { state } => {
            vec![WindowLayoutCommand::SetAutoBalance((*state).into())]
        }
        WindowCommands::SplitRatio { ratio } => vec![WindowLayoutCommand::SetSplitRatio(*ratio)],
        WindowCommands::Shadow { mode } => {
            vec![WindowLayoutCommand::SetWindowShadow((*mode).into())]
        }
        WindowCommands::Topmost { state } => {
            vec![WindowLayoutCommand::SetWindowTopmost((*state).into())]
        }
        WindowCommands::Opacity { state, active, normal, duration } => {
            let mut commands = Vec::new();
            commands.extend(state.map(|s| WindowLayoutCommand::SetWindowOpacity(s.into())));
            commands.extend(active.map(WindowLayoutCommand::SetActiveWindowOpacity));
            commands.extend(normal.map(WindowLayoutCommand::SetNormalWindowOpacity));
            commands.extend(duration.map(WindowLayoutCommand::SetWindowOpacityDuration));
            commands
        }
        WindowCommands::Border { state, width, active_color, normal_color } => {
            let mut commands = Vec::new();
            commands.extend(state.map(|s| WindowLayoutCommand::SetWindowBorder(s.into())));
            commands.extend(width.map(WindowLayoutCommand::SetWindowBorderWidth));
            commands.extend(active_color.map(WindowLayoutCommand::SetActiveWindowBorderColor));
            commands.extend(normal_color.map(WindowLayoutCommand::SetNormalWindowBorderColor));
            commands
        }
        WindowCommands::Focus { mouse_follows_focus, focus_follows_mouse } => {
            let mut commands = Vec::new();
            commands.extend(
                mouse_follows_focus.map(|s| WindowLayoutCommand::SetMouseFollowsFocus(s.into())),
            );
            commands.extend(
                focus_follows_mouse.map(|m| WindowLayoutCommand::SetFocusFollowsMouse(m.into())),
            );
            commands
        }
    };

    if commands.is_empty() {
        return Err(TesseraError::InvalidArguments(
            "Nothing to change. Pass at least one value (see --help).".to_string(),
        ));
    }

    Ok(commands)
}

/// Execute window subcommands.
///
/// # Errors
///
/// Returns an error if the arguments are empty or the snapshot cannot be saved.
pub fn execute(cmd: &WindowCommands, session: &mut Session) -> Result<(), TesseraError> {
    session.apply(to_commands(cmd)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Layout, WindowShadow};

    #[test]
    fn test_layout_command() {
        let commands = to_commands(&WindowCommands::Layout { layout: CliLayout::Bsp }).unwrap();
        assert_eq!(commands, vec![WindowLayoutCommand::SetLayout(Layout::Bsp)]);
    }

    #[test]
    fn test_padding_all_then_sides() {
        let commands = to_commands(&WindowCommands::Padding {
            all: Some(8),
            top: None,
            bottom: Some(0),
            left: None,
            right: None,
        })
        .unwrap();

        assert_eq!(
            commands,
            vec![WindowLayoutCommand::SetPadding(8), WindowLayoutCommand::SetPaddingBottom(0)]
        );
    }

    #[test]
    fn test_empty_optional_command_is_rejected() {
        let result = to_commands(&WindowCommands::Opacity {
            state: None,
            active: None,
            normal: None,
            duration: None,
        });
        assert!(matches!(result, Err(TesseraError::InvalidArguments(_))));
    }

    #[test]
    fn test_border_colors() {
        let color: Color = "#b4befe".parse().unwrap();
        let commands = to_commands(&WindowCommands::Border {
            state: Some(Switch::On),
            width: None,
            active_color: Some(color),
            normal_color: None,
        })
        .unwrap();

        assert_eq!(
            commands,
            vec![
                WindowLayoutCommand::SetWindowBorder(true),
                WindowLayoutCommand::SetActiveWindowBorderColor(color),
            ]
        );
    }

    #[test]
    fn test_shadow_float() {
        let commands = to_commands(&WindowCommands::Shadow { mode: CliShadow::Float }).unwrap();
        assert_eq!(commands, vec![WindowLayoutCommand::SetWindowShadow(WindowShadow::Float)]);
    }
}
