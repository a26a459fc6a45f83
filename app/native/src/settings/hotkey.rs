//! `skhd` hotkey settings.
//!
//! Hotkeys drive `yabai` window commands: focus, swap and resize in the four
//! cardinal directions, plus optional shortcuts that switch the space layout or
//! toggle padding and gaps. The rendered `.skhdrc` contains one binding per line.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::binding::Binding;
use super::{Domain, Settings, join_lines};

/// A cardinal direction for window focus, swap and resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in render order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Direction name understood by `yabai -m window --focus`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// `skhd` arrow key for this direction.
    #[must_use]
    pub const fn arrow_key(self) -> &'static str {
        match self {
            Self::North => "up",
            Self::South => "down",
            Self::East => "right",
            Self::West => "left",
        }
    }

    /// Vim-style key for this direction.
    #[must_use]
    pub const fn vim_key(self) -> &'static str {
        match self {
            Self::North => "k",
            Self::South => "j",
            Self::East => "l",
            Self::West => "h",
        }
    }

    /// `yabai -m window --resize` argument growing the window towards this direction.
    #[must_use]
    pub fn resize_argument(self, step: u32) -> String {
        match self {
            Self::North => format!("top:0:-{step}"),
            Self::South => format!("bottom:0:{step}"),
            Self::East => format!("right:{step}:0"),
            Self::West => format!("left:-{step}:0"),
        }
    }
}

/// Which keys map to directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// Arrow keys.
    #[default]
    Arrows,
    /// `h`, `j`, `k`, `l`.
    Vim,
    /// Keys from [`HotkeyState::custom_keys`].
    Custom,
}

/// Keys used for each direction by the custom scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DirectionKeys {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
}

impl Default for DirectionKeys {
    fn default() -> Self {
        Self {
            north: Direction::North.arrow_key().to_string(),
            south: Direction::South.arrow_key().to_string(),
            east: Direction::East.arrow_key().to_string(),
            west: Direction::West.arrow_key().to_string(),
        }
    }
}

impl DirectionKeys {
    /// Returns the key for `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> &str {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut String {
        match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }

    /// Trims and lowercases every key. A key that is blank or not a single
    /// `skhd` key token falls back to the arrow key for its direction.
    #[must_use]
    fn normalized(mut self) -> Self {
        for direction in Direction::ALL {
            let slot = self.slot_mut(direction);
            let trimmed = slot.trim().to_lowercase();
            *slot = if is_key_token(&trimmed) {
                trimmed
            } else {
                if !trimmed.is_empty() {
                    tracing::warn!(
                        key = %trimmed,
                        direction = direction.as_str(),
                        "hotkey: invalid key, using arrow key"
                    );
                }
                direction.arrow_key().to_string()
            };
        }
        self
    }
}

/// Returns true if `key` is one `skhd` key token, e.g. `h`, `f12`, `0x32`.
///
/// Whitespace, control characters, `:` and `#` would end the key and start
/// a command or comment in `.skhdrc`.
#[must_use]
pub fn is_key_token(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|c| !c.is_whitespace() && !c.is_control() && c != ':' && c != '#')
}

/// Modifier keys held for a hotkey.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Modifiers {
    pub cmd: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self { cmd: false, ctrl: false, alt: false, shift: false };

    /// Option only.
    pub const ALT: Self = Self { alt: true, ..Self::NONE };

    /// Returns true if no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool { !(self.cmd || self.ctrl || self.alt || self.shift) }

    /// Returns these modifiers with shift added.
    #[must_use]
    pub const fn with_shift(self) -> Self { Self { shift: true, ..self } }

    /// Returns these modifiers with control added.
    #[must_use]
    pub const fn with_ctrl(self) -> Self { Self { ctrl: true, ..self } }
}

impl fmt::Display for Modifiers {
    /// Formats in `skhd` order, e.g. `cmd + shift`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.cmd, "cmd"),
            (self.ctrl, "ctrl"),
            (self.alt, "alt"),
            (self.shift, "shift"),
        ];
        let held: Vec<&str> = names.iter().filter(|(on, _)| *on).map(|(_, name)| *name).collect();
        f.write_str(&held.join(" + "))
    }
}

impl FromStr for Modifiers {
    type Err = String;

    /// Parses `+`-separated modifier names (`cmd+shift`, `ctrl + alt`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Self::NONE;

        for token in s.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_lowercase().as_str() {
                "cmd" | "command" | "⌘" => modifiers.cmd = true,
                "ctrl" | "control" | "⌃" => modifiers.ctrl = true,
                "alt" | "opt" | "option" | "⌥" => modifiers.alt = true,
                "shift" | "⇧" => modifiers.shift = true,
                _ => return Err(format!("Unknown modifier '{token}'")),
            }
        }

        Ok(modifiers)
    }
}

/// A key combination, e.g. `shift + alt - f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Shortcut {
    #[serde(default)]
    pub modifiers: Modifiers,
    pub key: String,
}

impl Shortcut {
    /// Creates a shortcut.
    #[must_use]
    pub fn new(modifiers: Modifiers, key: impl Into<String>) -> Self {
        Self { modifiers, key: key.into() }
    }

    /// Renders an `skhd` binding line running `command`.
    #[must_use]
    pub fn bind(&self, command: &str) -> String { format!("{self} : {command}") }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            f.write_str(&self.key)
        } else {
            write!(f, "{} - {}", self.modifiers, self.key)
        }
    }
}

impl FromStr for Shortcut {
    type Err = String;

    /// Parses `skhd`-style (`shift + alt - f`) or compact (`cmd+alt+f`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (modifiers, key) = trimmed
            .rsplit_once('-')
            .or_else(|| trimmed.rsplit_once('+'))
            .unwrap_or(("", trimmed));

        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(format!("Shortcut '{s}' has no key"));
        }
        if !is_key_token(&key) {
            return Err(format!("Shortcut '{s}' has an invalid key '{key}'"));
        }

        Ok(Self {
            modifiers: modifiers.parse()?,
            key,
        })
    }
}

/// Layout shortcuts bound to a `yabai` space command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LayoutShortcut {
    Float,
    Bsp,
    Stack,
    Padding,
    Gaps,
}

impl LayoutShortcut {
    /// Every layout shortcut, in render order.
    pub const ALL: [Self; 5] = [Self::Float, Self::Bsp, Self::Stack, Self::Padding, Self::Gaps];

    /// The `yabai` command the shortcut runs.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Float => "yabai -m space --layout float",
            Self::Bsp => "yabai -m space --layout bsp",
            Self::Stack => "yabai -m space --layout stack",
            Self::Padding => "yabai -m space --toggle padding",
            Self::Gaps => "yabai -m space --toggle gap",
        }
    }
}

/// Hotkey daemon preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HotkeyState {
    /// Which keys map to directions.
    pub scheme: KeyScheme,
    /// Direction keys used when `scheme` is `custom`.
    pub custom_keys: DirectionKeys,
    /// Modifiers for moving focus.
    pub focus_modifiers: Modifiers,
    /// Modifiers for swapping windows.
    pub swap_modifiers: Modifiers,
    /// Modifiers for resizing windows.
    pub resize_modifiers: Modifiers,
    /// Resize increment in points.
    pub resize_step: u32,
    pub toggle_float: Option<Shortcut>,
    pub toggle_bsp: Option<Shortcut>,
    pub toggle_stack: Option<Shortcut>,
    pub toggle_padding: Option<Shortcut>,
    pub toggle_gaps: Option<Shortcut>,
}

impl Default for HotkeyState {
    fn default() -> Self {
        Self {
            scheme: KeyScheme::Arrows,
            custom_keys: DirectionKeys::default(),
            focus_modifiers: Modifiers::ALT,
            swap_modifiers: Modifiers::ALT.with_shift(),
            resize_modifiers: Modifiers::ALT.with_ctrl(),
            resize_step: 20,
            toggle_float: None,
            toggle_bsp: None,
            toggle_stack: None,
            toggle_padding: None,
            toggle_gaps: None,
        }
    }
}

impl HotkeyState {
    /// Returns the key bound to `direction` under the active scheme.
    #[must_use]
    pub fn key_for(&self, direction: Direction) -> &str {
        match self.scheme {
            KeyScheme::Arrows => direction.arrow_key(),
            KeyScheme::Vim => direction.vim_key(),
            KeyScheme::Custom => self.custom_keys.get(direction),
        }
    }

    /// Returns the shortcut configured for `target`, if any.
    #[must_use]
    pub const fn layout_shortcut(&self, target: LayoutShortcut) -> Option<&Shortcut> {
        match target {
            LayoutShortcut::Float => self.toggle_float.as_ref(),
            LayoutShortcut::Bsp => self.toggle_bsp.as_ref(),
            LayoutShortcut::Stack => self.toggle_stack.as_ref(),
            LayoutShortcut::Padding => self.toggle_padding.as_ref(),
            LayoutShortcut::Gaps => self.toggle_gaps.as_ref(),
        }
    }

    fn layout_shortcut_mut(&mut self, target: LayoutShortcut) -> &mut Option<Shortcut> {
        match target {
            LayoutShortcut::Float => &mut self.toggle_float,
            LayoutShortcut::Bsp => &mut self.toggle_bsp,
            LayoutShortcut::Stack => &mut self.toggle_stack,
            LayoutShortcut::Padding => &mut self.toggle_padding,
            LayoutShortcut::Gaps => &mut self.toggle_gaps,
        }
    }
}

impl Settings for HotkeyState {
    const DOMAIN: Domain = Domain::Hotkey;

    fn to_config_script(&self) -> String {
        let keyed = |modifiers: Modifiers, direction: Direction| {
            Shortcut::new(modifiers, self.key_for(direction))
        };

        let focus = Direction::ALL.into_iter().map(|d| {
            keyed(self.focus_modifiers, d).bind(&format!("yabai -m window --focus {}", d.as_str()))
        });
        let swap = Direction::ALL.into_iter().map(|d| {
            keyed(self.swap_modifiers, d).bind(&format!("yabai -m window --swap {}", d.as_str()))
        });
        let resize = Direction::ALL.into_iter().map(|d| {
            keyed(self.resize_modifiers, d).bind(&format!(
                "yabai -m window --resize {}",
                d.resize_argument(self.resize_step)
            ))
        });
        let layout = LayoutShortcut::ALL.into_iter().filter_map(|target| {
            self.layout_shortcut(target).map(|shortcut| shortcut.bind(target.command()))
        });

        join_lines(focus.chain(swap).chain(resize).chain(layout))
    }

    /// Enforces field invariants: a non-zero resize step and valid keys.
    /// Layout shortcuts with an invalid key are dropped.
    fn normalized(mut self) -> Self {
        self.resize_step = self.resize_step.max(1);
        self.custom_keys = self.custom_keys.normalized();
        for target in LayoutShortcut::ALL {
            let slot = self.layout_shortcut_mut(target);
            if let Some(shortcut) = slot.as_mut() {
                shortcut.key = shortcut.key.trim().to_lowercase();
            }
            if slot.as_ref().is_some_and(|s| !is_key_token(&s.key)) {
                tracing::warn!(shortcut = ?target, "hotkey: invalid key, unbinding");
                *slot = None;
            }
        }
        self
    }
}

/// Edits to [`HotkeyState`].
#[derive(Debug, Clone, PartialEq)]
pub enum HotkeyCommand {
    SetScheme(KeyScheme),
    SetCustomKey(Direction, String),
    SetFocusModifiers(Modifiers),
    SetSwapModifiers(Modifiers),
    SetResizeModifiers(Modifiers),
    SetResizeStep(u32),
    /// Binds (`Some`) or clears (`None`) a layout shortcut.
    SetLayoutShortcut(LayoutShortcut, Option<Shortcut>),
    /// Sets any field by its snapshot path.
    Bind(Binding),
}

/// Applies `command` to `state`.
#[must_use]
pub fn reduce(mut state: HotkeyState, command: &HotkeyCommand) -> HotkeyState {
    match command {
        HotkeyCommand::SetScheme(scheme) => state.scheme = *scheme,
        HotkeyCommand::SetCustomKey(direction, key) => {
            *state.custom_keys.slot_mut(*direction) = key.clone();
        }
        HotkeyCommand::SetFocusModifiers(modifiers) => state.focus_modifiers = *modifiers,
        HotkeyCommand::SetSwapModifiers(modifiers) => state.swap_modifiers = *modifiers,
        HotkeyCommand::SetResizeModifiers(modifiers) => state.resize_modifiers = *modifiers,
        HotkeyCommand::SetResizeStep(step) => state.resize_step = *step,
        HotkeyCommand::SetLayoutShortcut(target, shortcut) => {
            *state.layout_shortcut_mut(*target) = shortcut.clone();
        }
        HotkeyCommand::Bind(binding) => state = binding.apply(state),
    }

    state.normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_has_twelve_direction_bindings() {
        let script = HotkeyState::default().to_config_script();
        assert_eq!(script.lines().count(), 12);
        assert!(script.contains("alt - up : yabai -m window --focus north\n"));
        assert!(script.contains("alt + shift - left : yabai -m window --swap west\n"));
        assert!(script.contains("ctrl + alt - right : yabai -m window --resize right:20:0\n"));
    }

    #[test]
    fn test_vim_scheme_uses_hjkl() {
        let state = reduce(HotkeyState::default(), &HotkeyCommand::SetScheme(KeyScheme::Vim));
        let script = state.to_config_script();
        assert!(script.contains("alt - h : yabai -m window --focus west\n"));
        assert!(script.contains("alt - k : yabai -m window --focus north\n"));
    }

    #[test]
    fn test_custom_scheme_uses_custom_keys() {
        let mut state = reduce(HotkeyState::default(), &HotkeyCommand::SetScheme(KeyScheme::Custom));
        state = reduce(state, &HotkeyCommand::SetCustomKey(Direction::West, " A ".to_string()));
        assert_eq!(state.key_for(Direction::West), "a");

        state = reduce(state, &HotkeyCommand::SetCustomKey(Direction::West, "   ".to_string()));
        assert_eq!(state.key_for(Direction::West), "left");
    }

    #[test]
    fn test_resize_step_is_never_zero() {
        let state = reduce(HotkeyState::default(), &HotkeyCommand::SetResizeStep(0));
        assert_eq!(state.resize_step, 1);
        assert!(state.to_config_script().contains("--resize top:0:-1\n"));
    }

    #[test]
    fn test_layout_shortcuts_render_after_directions() {
        let shortcut: Shortcut = "shift + alt - space".parse().unwrap();
        let state = reduce(
            HotkeyState::default(),
            &HotkeyCommand::SetLayoutShortcut(LayoutShortcut::Bsp, Some(shortcut)),
        );

        let script = state.to_config_script();
        let last = script.lines().last().unwrap();
        assert_eq!(last, "alt + shift - space : yabai -m space --layout bsp");

        let cleared = reduce(state, &HotkeyCommand::SetLayoutShortcut(LayoutShortcut::Bsp, None));
        assert_eq!(cleared.to_config_script().lines().count(), 12);
    }

    #[test]
    fn test_shortcut_parsing() {
        let compact: Shortcut = "cmd+alt+F".parse().unwrap();
        assert_eq!(compact.key, "f");
        assert!(compact.modifiers.cmd && compact.modifiers.alt);

        let bare: Shortcut = "f12".parse().unwrap();
        assert!(bare.modifiers.is_empty());
        assert_eq!(bare.to_string(), "f12");

        assert!("hyper - x".parse::<Shortcut>().is_err());
        assert!("alt -".parse::<Shortcut>().is_err());
    }

    #[test]
    fn test_modifiers_render_in_fixed_order() {
        let modifiers: Modifiers = "shift+cmd+alt".parse().unwrap();
        assert_eq!(modifiers.to_string(), "cmd + alt + shift");
    }

    #[test]
    fn test_bind_nested_modifier() {
        let state = reduce(
            HotkeyState::default(),
            &HotkeyCommand::Bind(Binding::new("focusModifiers.cmd", true)),
        );
        assert!(state.focus_modifiers.cmd);
        assert!(state.focus_modifiers.alt);
    }

    #[test]
    fn test_key_token_rejects_line_breaks_and_separators() {
        assert!(is_key_token("h"));
        assert!(is_key_token("0x32"));
        assert!(!is_key_token(""));
        assert!(!is_key_token("h\nalt"));
        assert!(!is_key_token("a b"));
        assert!(!is_key_token("q:rm"));
        assert!(!is_key_token("#x"));
    }

    #[test]
    fn test_custom_key_with_newline_cannot_add_bindings() {
        let mut state = reduce(HotkeyState::default(), &HotkeyCommand::SetScheme(KeyScheme::Custom));
        state = reduce(
            state,
            &HotkeyCommand::SetCustomKey(Direction::West, "h\nalt - q : rm -rf ~".to_string()),
        );

        assert_eq!(state.key_for(Direction::West), "left");
        let script = state.to_config_script();
        assert_eq!(script.lines().count(), 12);
        assert!(!script.contains("rm -rf"));
    }

    #[test]
    fn test_shortcut_with_invalid_key_is_rejected() {
        assert!("alt - q : rm".parse::<Shortcut>().is_err());
        assert!("cmd+a\tb".parse::<Shortcut>().is_err());
    }

    #[test]
    fn test_bound_shortcut_with_invalid_key_is_dropped() {
        let state = reduce(
            HotkeyState::default(),
            &HotkeyCommand::Bind(Binding::new(
                "toggleBsp",
                serde_json::json!({ "modifiers": { "alt": true }, "key": "b\nalt - x : reboot" }),
            )),
        );

        assert!(state.toggle_bsp.is_none());
        assert_eq!(state.to_config_script().lines().count(), 12);
    }
}
