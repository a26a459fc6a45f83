//! `yabai` window layout settings.
//!
//! Covers the global settings documented under "Global Settings" in the
//! `yabai` manual. Each field renders to one `yabai -m config <key> <value>`
//! line in `.yabairc`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::binding::Binding;
use super::color::Color;
use super::{Domain, Settings, join_lines};

/// Smallest split ratio `yabai` accepts.
pub const MIN_SPLIT_RATIO: f64 = 0.1;

/// Largest split ratio `yabai` accepts.
pub const MAX_SPLIT_RATIO: f64 = 0.9;

/// Widest border the settings allow, in points.
pub const MAX_BORDER_WIDTH: u32 = 30;

/// Space layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Windows are not managed.
    #[default]
    Float,
    /// Binary space partitioning.
    Bsp,
    /// Windows stacked on top of each other.
    Stack,
}

impl Layout {
    /// Value used in `.yabairc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Bsp => "bsp",
            Self::Stack => "stack",
        }
    }
}

/// Which side of a split a new window is inserted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WindowPlacement {
    /// New window becomes the left/top child.
    FirstChild,
    /// New window becomes the right/bottom child.
    #[default]
    SecondChild,
}

impl WindowPlacement {
    /// Value used in `.yabairc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstChild => "first_child",
            Self::SecondChild => "second_child",
        }
    }
}

/// Window shadow mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WindowShadow {
    /// Shadows on every window.
    #[default]
    On,
    /// No shadows.
    Off,
    /// Shadows only on floating windows.
    Float,
}

impl WindowShadow {
    /// Value used in `.yabairc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Float => "float",
        }
    }
}

/// Focus-follows-mouse mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FocusFollowsMouse {
    /// Disabled.
    #[default]
    Off,
    /// Focus and raise the window under the cursor.
    Autoraise,
    /// Focus the window under the cursor without raising it.
    Autofocus,
}

impl FocusFollowsMouse {
    /// Value used in `.yabairc`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Autoraise => "autoraise",
            Self::Autofocus => "autofocus",
        }
    }
}

/// Window layout preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowLayoutState {
    /// Space layout.
    pub layout: Layout,
    /// Padding between windows and the top screen edge.
    pub padding_top: u32,
    /// Padding between windows and the bottom screen edge.
    pub padding_bottom: u32,
    /// Padding between windows and the left screen edge.
    pub padding_left: u32,
    /// Padding between windows and the right screen edge.
    pub padding_right: u32,
    /// Gap between tiled windows.
    pub window_gap: u32,
    /// Insertion side for new windows.
    pub window_placement: WindowPlacement,
    /// Keep every split at an equal ratio.
    pub auto_balance: bool,
    /// Ratio of new splits when `auto_balance` is off.
    pub split_ratio: f64,
    /// Keep floating windows above tiled ones.
    pub window_topmost: bool,
    /// Window shadow mode.
    pub window_shadow: WindowShadow,
    /// Dim unfocused windows.
    pub window_opacity: bool,
    /// Opacity fade duration in seconds.
    pub window_opacity_duration: f64,
    /// Opacity of the focused window.
    pub active_window_opacity: f64,
    /// Opacity of unfocused windows.
    pub normal_window_opacity: f64,
    /// Draw borders around windows.
    pub window_border: bool,
    /// Border width in points.
    pub window_border_width: u32,
    /// Border color of the focused window.
    pub active_window_border_color: Color,
    /// Border color of unfocused windows.
    pub normal_window_border_color: Color,
    /// Warp the cursor to the focused window.
    pub mouse_follows_focus: bool,
    /// Focus the window under the cursor.
    pub focus_follows_mouse: FocusFollowsMouse,
}

impl Default for WindowLayoutState {
    fn default() -> Self {
        Self {
            layout: Layout::Float,
            padding_top: 0,
            padding_bottom: 0,
            padding_left: 0,
            padding_right: 0,
            window_gap: 0,
            window_placement: WindowPlacement::SecondChild,
            auto_balance: false,
            split_ratio: 0.5,
            window_topmost: false,
            window_shadow: WindowShadow::On,
            window_opacity: false,
            window_opacity_duration: 0.0,
            active_window_opacity: 1.0,
            normal_window_opacity: 0.9,
            window_border: false,
            window_border_width: 4,
            active_window_border_color: Color::argb(0xff, 0x77, 0x57, 0x59),
            normal_window_border_color: Color::argb(0xff, 0x55, 0x55, 0x55),
            mouse_follows_focus: false,
            focus_follows_mouse: FocusFollowsMouse::Off,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

const fn on_off(value: bool) -> &'static str { if value { "on" } else { "off" } }

impl Settings for WindowLayoutState {
    const DOMAIN: Domain = Domain::WindowLayout;

    fn to_config_script(&self) -> String {
        let entries: [(&str, String); 21] = [
            ("layout", self.layout.as_str().to_string()),
            ("top_padding", self.padding_top.to_string()),
            ("bottom_padding", self.padding_bottom.to_string()),
            ("left_padding", self.padding_left.to_string()),
            ("right_padding", self.padding_right.to_string()),
            ("window_gap", self.window_gap.to_string()),
            ("window_placement", self.window_placement.as_str().to_string()),
            ("auto_balance", on_off(self.auto_balance).to_string()),
            ("split_ratio", self.split_ratio.to_string()),
            ("window_topmost", on_off(self.window_topmost).to_string()),
            ("window_shadow", self.window_shadow.as_str().to_string()),
            ("window_opacity", on_off(self.window_opacity).to_string()),
            ("window_opacity_duration", self.window_opacity_duration.to_string()),
            ("active_window_opacity", self.active_window_opacity.to_string()),
            ("normal_window_opacity", self.normal_window_opacity.to_string()),
            ("window_border", on_off(self.window_border).to_string()),
            ("window_border_width", self.window_border_width.to_string()),
            ("active_window_border_color", self.active_window_border_color.to_hex()),
            ("normal_window_border_color", self.normal_window_border_color.to_hex()),
            ("mouse_follows_focus", on_off(self.mouse_follows_focus).to_string()),
            ("focus_follows_mouse", self.focus_follows_mouse.as_str().to_string()),
        ];

        join_lines(entries.iter().map(|(key, value)| format!("yabai -m config {key} {value}")))
    }

    /// Clamps every ranged field into the range `yabai` accepts.
    ///
    /// Non-finite values fall back to the field default.
    fn normalized(mut self) -> Self {
        let defaults = Self::default();

        self.split_ratio =
            finite_or(self.split_ratio, defaults.split_ratio).clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO);
        self.window_opacity_duration =
            finite_or(self.window_opacity_duration, defaults.window_opacity_duration).max(0.0);
        self.active_window_opacity =
            finite_or(self.active_window_opacity, defaults.active_window_opacity).clamp(0.0, 1.0);
        self.normal_window_opacity =
            finite_or(self.normal_window_opacity, defaults.normal_window_opacity).clamp(0.0, 1.0);
        self.window_border_width = self.window_border_width.min(MAX_BORDER_WIDTH);
        self
    }
}

/// Edits to [`WindowLayoutState`].
#[derive(Debug, Clone, PartialEq)]
pub enum WindowLayoutCommand {
    SetLayout(Layout),
    SetPaddingTop(u32),
    SetPaddingBottom(u32),
    SetPaddingLeft(u32),
    SetPaddingRight(u32),
    /// Sets all four paddings at once.
    SetPadding(u32),
    SetWindowGap(u32),
    SetWindowPlacement(WindowPlacement),
    SetAutoBalance(bool),
    SetSplitRatio(f64),
    SetWindowTopmost(bool),
    SetWindowShadow(WindowShadow),
    SetWindowOpacity(bool),
    SetWindowOpacityDuration(f64),
    SetActiveWindowOpacity(f64),
    SetNormalWindowOpacity(f64),
    SetWindowBorder(bool),
    SetWindowBorderWidth(u32),
    SetActiveWindowBorderColor(Color),
    SetNormalWindowBorderColor(Color),
    SetMouseFollowsFocus(bool),
    SetFocusFollowsMouse(FocusFollowsMouse),
    /// Sets any field by its snapshot path.
    Bind(Binding),
}

/// Applies `command` to `state`.
#[must_use]
pub fn reduce(mut state: WindowLayoutState, command: &WindowLayoutCommand) -> WindowLayoutState {
    match command {
        WindowLayoutCommand::SetLayout(layout) => state.layout = *layout,
        WindowLayoutCommand::SetPaddingTop(value) => state.padding_top = *value,
        WindowLayoutCommand::SetPaddingBottom(value) => state.padding_bottom = *value,
        WindowLayoutCommand::SetPaddingLeft(value) => state.padding_left = *value,
        WindowLayoutCommand::SetPaddingRight(value) => state.padding_right = *value,
        WindowLayoutCommand::SetPadding(value) => {
            state.padding_top = *value;
            state.padding_bottom = *value;
            state.padding_left = *value;
            state.padding_right = *value;
        }
        WindowLayoutCommand::SetWindowGap(value) => state.window_gap = *value,
        WindowLayoutCommand::SetWindowPlacement(placement) => state.window_placement = *placement,
        WindowLayoutCommand::SetAutoBalance(enabled) => state.auto_balance = *enabled,
        WindowLayoutCommand::SetSplitRatio(ratio) => state.split_ratio = *ratio,
        WindowLayoutCommand::SetWindowTopmost(enabled) => state.window_topmost = *enabled,
        WindowLayoutCommand::SetWindowShadow(shadow) => state.window_shadow = *shadow,
        WindowLayoutCommand::SetWindowOpacity(enabled) => state.window_opacity = *enabled,
        WindowLayoutCommand::SetWindowOpacityDuration(seconds) => {
            state.window_opacity_duration = *seconds;
        }
        WindowLayoutCommand::SetActiveWindowOpacity(opacity) => {
            state.active_window_opacity = *opacity;
        }
        WindowLayoutCommand::SetNormalWindowOpacity(opacity) => {
            state.normal_window_opacity = *opacity;
        }
        WindowLayoutCommand::SetWindowBorder(enabled) => state.window_border = *enabled,
        WindowLayoutCommand::SetWindowBorderWidth(width) => state.window_border_width = *width,
        WindowLayoutCommand::SetActiveWindowBorderColor(color) => {
            state.active_window_border_color = *color;
        }
        WindowLayoutCommand::SetNormalWindowBorderColor(color) => {
            state.normal_window_border_color = *color;
        }
        WindowLayoutCommand::SetMouseFollowsFocus(enabled) => state.mouse_follows_focus = *enabled,
        WindowLayoutCommand::SetFocusFollowsMouse(mode) => state.focus_follows_mouse = *mode,
        WindowLayoutCommand::Bind(binding) => state = binding.apply(state),
    }

    state.normalized()
}
