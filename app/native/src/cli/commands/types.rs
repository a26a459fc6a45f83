//! Shared argument types for CLI commands.
//!
//! These mirror the settings enums with `clap::ValueEnum` derives so the
//! settings types stay free of CLI concerns.

use crate::settings::{
    Domain, FocusFollowsMouse, KeyScheme, Layout, LayoutShortcut, WindowPlacement, WindowShadow,
};

/// A preference domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliDomain {
    /// yabai window layout (`YabaiState.json`, `.yabairc`).
    #[value(name = "window-layout", aliases = ["yabai", "window"])]
    WindowLayout,
    /// skhd hotkeys (`SKHDState.json`, `.skhdrc`).
    #[value(aliases = ["skhd", "hotkeys"])]
    Hotkey,
    /// macOS animations (`AnimationState.json`, `.animationSettingsRC.sh`).
    #[value(alias = "animations")]
    Animation,
}

impl From<CliDomain> for Domain {
    fn from(domain: CliDomain) -> Self {
        match domain {
            CliDomain::WindowLayout => Self::WindowLayout,
            CliDomain::Hotkey => Self::Hotkey,
            CliDomain::Animation => Self::Animation,
        }
    }
}

/// Expands an optional domain argument: `None` means every domain.
#[must_use]
pub fn domains(domain: Option<CliDomain>) -> Vec<Domain> {
    domain.map_or_else(|| Domain::ALL.to_vec(), |d| vec![d.into()])
}

/// An on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(switch: Switch) -> Self { matches!(switch, Switch::On) }
}

/// Space layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLayout {
    Float,
    Bsp,
    Stack,
}

impl From<CliLayout> for Layout {
    fn from(layout: CliLayout) -> Self {
        match layout {
            CliLayout::Float => Self::Float,
            CliLayout::Bsp => Self::Bsp,
            CliLayout::Stack => Self::Stack,
        }
    }
}

/// Where new windows are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliPlacement {
    FirstChild,
    SecondChild,
}

impl From<CliPlacement> for WindowPlacement {
    fn from(placement: CliPlacement) -> Self {
        match placement {
            CliPlacement::FirstChild => Self::FirstChild,
            CliPlacement::SecondChild => Self::SecondChild,
        }
    }
}

/// Window shadow mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliShadow {
    On,
    Off,
    /// Shadows on floating windows only.
    Float,
}

impl From<CliShadow> for WindowShadow {
    fn from(shadow: CliShadow) -> Self {
        match shadow {
            CliShadow::On => Self::On,
            CliShadow::Off => Self::Off,
            CliShadow::Float => Self::Float,
        }
    }
}

/// Focus-follows-mouse mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFocusMode {
    Off,
    Autoraise,
    Autofocus,
}

impl From<CliFocusMode> for FocusFollowsMouse {
    fn from(mode: CliFocusMode) -> Self {
        match mode {
            CliFocusMode::Off => Self::Off,
            CliFocusMode::Autoraise => Self::Autoraise,
            CliFocusMode::Autofocus => Self::Autofocus,
        }
    }
}

/// Direction key scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliScheme {
    Arrows,
    Vim,
    Custom,
}

impl From<CliScheme> for KeyScheme {
    fn from(scheme: CliScheme) -> Self {
        match scheme {
            CliScheme::Arrows => Self::Arrows,
            CliScheme::Vim => Self::Vim,
            CliScheme::Custom => Self::Custom,
        }
    }
}

/// Layout shortcut target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLayoutShortcut {
    Float,
    Bsp,
    Stack,
    Padding,
    Gaps,
}

impl From<CliLayoutShortcut> for LayoutShortcut {
    fn from(target: CliLayoutShortcut) -> Self {
        match target {
            CliLayoutShortcut::Float => Self::Float,
            CliLayoutShortcut::Bsp => Self::Bsp,
            CliLayoutShortcut::Stack => Self::Stack,
            CliLayoutShortcut::Padding => Self::Padding,
            CliLayoutShortcut::Gaps => Self::Gaps,
        }
    }
}

/// Window action driven by a modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliWindowAction {
    Focus,
    Swap,
    Resize,
}

/// Parses a `set` value: JSON when it parses, otherwise a plain string.
#[must_use]
pub fn parse_binding_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
