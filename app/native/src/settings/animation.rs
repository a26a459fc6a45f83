//! macOS system animation settings.
//!
//! A single switch. The rendered script either writes a `defaults` override
//! for every animation knob (disabled) or deletes the overrides (enabled), then
//! restarts the Dock so the change takes effect.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::binding::Binding;
use super::{Domain, Settings, join_lines};

const BANNER: [&str; 10] = [
    "#!/bin/bash",
    "#",
    "#  █████╗ ███╗   ██╗██╗███╗   ███╗ █████╗ ████████╗██╗ ██████╗ ███╗   ██╗███████╗",
    "# ██╔══██╗████╗  ██║██║████╗ ████║██╔══██╗╚══██╔══╝██║██╔═══██╗████╗  ██║██╔════╝",
    "# ███████║██╔██╗ ██║██║██╔████╔██║███████║   ██║   ██║██║   ██║██╔██╗ ██║███████╗",
    "# ██╔══██║██║╚██╗██║██║██║╚██╔╝██║██╔══██║   ██║   ██║██║   ██║██║╚██╗██║╚════██║",
    "# ██║  ██║██║ ╚████║██║██║ ╚═╝ ██║██║  ██║   ██║   ██║╚██████╔╝██║ ╚████║███████║",
    "# ╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝╚═╝     ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝ ╚═════╝ ╚═╝  ╚═══╝╚══════╝",
    "#",
    "",
];

const DIVIDER: &str =
    "#===================================================================================";

/// A `defaults` key overridden while animations are disabled.
struct Knob {
    domain: &'static str,
    key: &'static str,
    /// `-type value` written when disabling.
    disabled: &'static str,
}

const fn knob(domain: &'static str, key: &'static str, disabled: &'static str) -> Knob {
    Knob { domain, key, disabled }
}

const KNOBS: [Knob; 17] = [
    knob("-g", "NSAutomaticWindowAnimationsEnabled", "-bool false"),
    knob("-g", "NSScrollAnimationEnabled", "-bool false"),
    knob("-g", "NSWindowResizeTime", "-float 0.001"),
    knob("-g", "QLPanelAnimationDuration", "-float 0"),
    knob("-g", "NSScrollViewRubberbanding", "-bool false"),
    knob("-g", "NSDocumentRevisionsWindowTransformAnimation", "-bool false"),
    knob("-g", "NSToolbarFullScreenAnimationDuration", "-float 0"),
    knob("-g", "NSBrowserColumnAnimationSpeedMultiplier", "-float 0"),
    knob("com.apple.dock", "autohide-time-modifier", "-float 0"),
    knob("com.apple.dock", "autohide-delay", "-float 0"),
    knob("com.apple.dock", "expose-animation-duration", "-float 0"),
    knob("com.apple.dock", "springboard-show-duration", "-float 0"),
    knob("com.apple.dock", "springboard-hide-duration", "-float 0"),
    knob("com.apple.dock", "springboard-page-duration", "-float 0"),
    knob("com.apple.finder", "DisableAllAnimations", "-bool true"),
    knob("com.apple.Mail", "DisableSendAnimations", "-bool true"),
    knob("com.apple.Mail", "DisableReplyAnimations", "-bool true"),
];

/// Animation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationState {
    /// Whether system animations run at their stock speed.
    pub all_enabled: bool,
}

impl Default for AnimationState {
    fn default() -> Self { Self { all_enabled: true } }
}

impl Settings for AnimationState {
    const DOMAIN: Domain = Domain::Animation;

    fn to_config_script(&self) -> String {
        let (title, lines): (&str, Vec<String>) = if self.all_enabled {
            (
                "# Enabled Animations",
                KNOBS.iter().map(|k| format!("defaults delete {} {}", k.domain, k.key)).collect(),
            )
        } else {
            (
                "# Disabled Animations",
                KNOBS
                    .iter()
                    .map(|k| format!("defaults write {} {} {}", k.domain, k.key, k.disabled))
                    .collect(),
            )
        };

        let head = BANNER.into_iter().chain([DIVIDER, title, DIVIDER]).map(str::to_string);
        join_lines(head.chain(lines).chain(std::iter::once("killall Dock".to_string())))
    }
}

/// Edits to [`AnimationState`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationCommand {
    SetAllEnabled(bool),
    /// Flips `all_enabled`.
    Toggle,
    Bind(Binding),
}

/// Applies `command` to `state`.
#[must_use]
pub fn reduce(state: AnimationState, command: &AnimationCommand) -> AnimationState {
    match command {
        AnimationCommand::SetAllEnabled(enabled) => AnimationState { all_enabled: *enabled },
        AnimationCommand::Toggle => AnimationState { all_enabled: !state.all_enabled },
        AnimationCommand::Bind(binding) => binding.apply(state),
    }
}
