//! Preference domains edited by Tessera.
//!
//! Each domain is a flat, serializable record with a pure reducer:
//!
//! - `window_layout` - `yabai` layout, padding, opacity, border and focus settings
//! - `hotkey` - `skhd` keybindings that drive `yabai`
//! - `animation` - macOS system animation toggles
//!
//! Domains know nothing about persistence or about each other. The store lifts
//! their reducers into the root state (see [`crate::store`]).

pub mod animation;
pub mod binding;
pub mod color;
pub mod hotkey;
pub mod window_layout;

use std::fmt;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use animation::{AnimationCommand, AnimationState};
pub use binding::Binding;
pub use color::{Color, parse_hex_color};
pub use hotkey::{
    Direction, DirectionKeys, HotkeyCommand, HotkeyState, KeyScheme, LayoutShortcut, Modifiers,
    Shortcut,
};
pub use window_layout::{
    FocusFollowsMouse, Layout, WindowLayoutCommand, WindowLayoutState, WindowPlacement,
    WindowShadow,
};

/// Identifies one independently editable preference group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// `yabai` window layout settings.
    WindowLayout,
    /// `skhd` hotkey settings.
    Hotkey,
    /// macOS animation settings.
    Animation,
}

impl Domain {
    /// Every domain, in routing and load order.
    pub const ALL: [Self; 3] = [Self::WindowLayout, Self::Hotkey, Self::Animation];

    /// Returns the stable identifier used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WindowLayout => "window-layout",
            Self::Hotkey => "hotkey",
            Self::Animation => "animation",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A domain state record that can be snapshotted and rendered to a config script.
///
/// Implementors must have a total `Default`: the default value is always a
/// valid snapshot and always renders to a complete script.
pub trait Settings:
    Serialize + DeserializeOwned + JsonSchema + Default + Clone + PartialEq + fmt::Debug
{
    /// The domain this record belongs to.
    const DOMAIN: Domain;

    /// Renders the record into the literal script consumed by the external tool.
    ///
    /// Output depends only on `self` and is byte-identical for equal records.
    fn to_config_script(&self) -> String;

    /// Forces every field into the range the external tool accepts.
    ///
    /// Must be idempotent. Applied after every edit and to every loaded
    /// snapshot, so stored and rendered records are always valid.
    #[must_use]
    fn normalized(self) -> Self { self }
}

/// Joins rendered script lines, terminating the last one with a newline.
pub(crate) fn join_lines<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut script = String::new();
    for line in lines {
        script.push_str(line.as_ref());
        script.push('\n');
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_identifiers_are_unique() {
        let names: Vec<_> = Domain::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["window-layout", "hotkey", "animation"]);
    }

    #[test]
    fn test_domain_serializes_kebab_case() {
        let json = serde_json::to_string(&Domain::WindowLayout).unwrap();
        assert_eq!(json, "\"window-layout\"");
    }

    #[test]
    fn test_settings_domains_match_types() {
        assert_eq!(WindowLayoutState::DOMAIN, Domain::WindowLayout);
        assert_eq!(HotkeyState::DOMAIN, Domain::Hotkey);
        assert_eq!(AnimationState::DOMAIN, Domain::Animation);
    }

    #[test]
    fn test_join_lines_terminates_each_line() {
        assert_eq!(join_lines(["a", "b"]), "a\nb\n");
        assert_eq!(join_lines(Vec::<String>::new()), "");
    }
}
