//! Root state, root commands and the composite reducer.

use schemars::JsonSchema;
use serde::Serialize;

use super::error::OperationError;
use super::reducer::{CommandPrism, Combine, FnReducer, Pullback, Reducer, StateLens};
use crate::persistence::{ConfigExporter, RoutingTable, SnapshotCodec};
use crate::settings::{
    AnimationCommand, AnimationState, Domain, HotkeyCommand, HotkeyState, Settings,
    WindowLayoutCommand, WindowLayoutState, animation, hotkey, window_layout,
};

/// Everything the editor holds in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    pub window_layout: WindowLayoutState,
    pub hotkey: HotkeyState,
    pub animation: AnimationState,
    /// The most recent persistence failure, cleared by the next success.
    pub last_error: Option<OperationError>,
}

impl RootState {
    /// Returns `domain`'s state as the JSON tree its snapshot file holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be represented as JSON.
    pub fn snapshot_value(&self, domain: Domain) -> Result<serde_json::Value, serde_json::Error> {
        match domain {
            Domain::WindowLayout => serde_json::to_value(&self.window_layout),
            Domain::Hotkey => serde_json::to_value(&self.hotkey),
            Domain::Animation => serde_json::to_value(&self.animation),
        }
    }

    /// Renders `domain`'s config script.
    #[must_use]
    pub fn config_script(&self, domain: Domain) -> String {
        match domain {
            Domain::WindowLayout => self.window_layout.to_config_script(),
            Domain::Hotkey => self.hotkey.to_config_script(),
            Domain::Animation => self.animation.to_config_script(),
        }
    }
}

/// A persistence request for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistCommand {
    /// Write the domain's snapshot.
    Save(Domain),
    /// Replace the domain's state with its snapshot.
    Load(Domain),
    /// Write the domain's config script.
    Export(Domain),
}

impl PersistCommand {
    #[must_use]
    pub const fn domain(self) -> Domain {
        match self {
            Self::Save(domain) | Self::Load(domain) | Self::Export(domain) => domain,
        }
    }
}

/// Every command the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum RootCommand {
    WindowLayout(WindowLayoutCommand),
    Hotkey(HotkeyCommand),
    Animation(AnimationCommand),
    Persist(PersistCommand),
}

impl RootCommand {
    /// Shorthand for a save request.
    #[must_use]
    pub const fn save(domain: Domain) -> Self { Self::Persist(PersistCommand::Save(domain)) }

    /// Shorthand for a load request.
    #[must_use]
    pub const fn load(domain: Domain) -> Self { Self::Persist(PersistCommand::Load(domain)) }

    /// Shorthand for an export request.
    #[must_use]
    pub const fn export(domain: Domain) -> Self { Self::Persist(PersistCommand::Export(domain)) }
}

impl From<WindowLayoutCommand> for RootCommand {
    fn from(command: WindowLayoutCommand) -> Self { Self::WindowLayout(command) }
}

impl From<HotkeyCommand> for RootCommand {
    fn from(command: HotkeyCommand) -> Self { Self::Hotkey(command) }
}

impl From<AnimationCommand> for RootCommand {
    fn from(command: AnimationCommand) -> Self { Self::Animation(command) }
}

impl From<PersistCommand> for RootCommand {
    fn from(command: PersistCommand) -> Self { Self::Persist(command) }
}

const fn project_window_layout(root: &RootState) -> &WindowLayoutState { &root.window_layout }

fn inject_window_layout(root: RootState, window_layout: WindowLayoutState) -> RootState {
    RootState { window_layout, ..root }
}

const fn project_hotkey(root: &RootState) -> &HotkeyState { &root.hotkey }

fn inject_hotkey(root: RootState, hotkey: HotkeyState) -> RootState {
    RootState { hotkey, ..root }
}

const fn project_animation(root: &RootState) -> &AnimationState { &root.animation }

fn inject_animation(root: RootState, animation: AnimationState) -> RootState {
    RootState { animation, ..root }
}

const fn extract_window_layout(command: &RootCommand) -> Option<&WindowLayoutCommand> {
    match command {
        RootCommand::WindowLayout(command) => Some(command),
        _ => None,
    }
}

const fn extract_hotkey(command: &RootCommand) -> Option<&HotkeyCommand> {
    match command {
        RootCommand::Hotkey(command) => Some(command),
        _ => None,
    }
}

const fn extract_animation(command: &RootCommand) -> Option<&AnimationCommand> {
    match command {
        RootCommand::Animation(command) => Some(command),
        _ => None,
    }
}

pub const WINDOW_LAYOUT_LENS: StateLens<RootState, WindowLayoutState> =
    StateLens { project: project_window_layout, inject: inject_window_layout };

pub const HOTKEY_LENS: StateLens<RootState, HotkeyState> =
    StateLens { project: project_hotkey, inject: inject_hotkey };

pub const ANIMATION_LENS: StateLens<RootState, AnimationState> =
    StateLens { project: project_animation, inject: inject_animation };

pub const WINDOW_LAYOUT_PRISM: CommandPrism<RootCommand, WindowLayoutCommand> =
    CommandPrism { embed: RootCommand::WindowLayout, try_extract: extract_window_layout };

pub const HOTKEY_PRISM: CommandPrism<RootCommand, HotkeyCommand> =
    CommandPrism { embed: RootCommand::Hotkey, try_extract: extract_hotkey };

pub const ANIMATION_PRISM: CommandPrism<RootCommand, AnimationCommand> =
    CommandPrism { embed: RootCommand::Animation, try_extract: extract_animation };

/// Performs the file I/O behind [`PersistCommand`]s.
///
/// Success clears [`RootState::last_error`]; failure stores the error there.
/// A failed load leaves the domain's in-memory state untouched.
#[derive(Debug, Clone)]
pub struct PersistReducer {
    codec: SnapshotCodec,
    exporter: ConfigExporter,
}

impl PersistReducer {
    #[must_use]
    pub fn new(routes: &RoutingTable) -> Self {
        Self {
            codec: SnapshotCodec::new(routes.clone()),
            exporter: ConfigExporter::new(routes.clone()),
        }
    }

    fn save(&self, state: &RootState, domain: Domain) -> Result<(), OperationError> {
        match domain {
            Domain::WindowLayout => self.codec.save(&state.window_layout),
            Domain::Hotkey => self.codec.save(&state.hotkey),
            Domain::Animation => self.codec.save(&state.animation),
        }
    }

    fn export(&self, state: &RootState, domain: Domain) -> Result<(), OperationError> {
        match domain {
            Domain::WindowLayout => self.exporter.export(&state.window_layout),
            Domain::Hotkey => self.exporter.export(&state.hotkey),
            Domain::Animation => self.exporter.export(&state.animation),
        }
    }

    fn load_into<S: Settings>(&self, state: RootState, lens: StateLens<RootState, S>) -> RootState {
        match self.codec.load::<S>() {
            Ok(loaded) => RootState { last_error: None, ..(lens.inject)(state, loaded) },
            Err(err) => RootState { last_error: Some(err), ..state },
        }
    }
}

fn record(state: RootState, outcome: Result<(), OperationError>) -> RootState {
    RootState { last_error: outcome.err(), ..state }
}

impl Reducer<RootState, RootCommand> for PersistReducer {
    fn reduce(&self, state: RootState, command: &RootCommand) -> RootState {
        let RootCommand::Persist(persist) = command else {
            return state;
        };

        match *persist {
            PersistCommand::Save(domain) => {
                let outcome = self.save(&state, domain);
                record(state, outcome)
            }
            PersistCommand::Export(domain) => {
                let outcome = self.export(&state, domain);
                record(state, outcome)
            }
            PersistCommand::Load(Domain::WindowLayout) => self.load_into(state, WINDOW_LAYOUT_LENS),
            PersistCommand::Load(Domain::Hotkey) => self.load_into(state, HOTKEY_LENS),
            PersistCommand::Load(Domain::Animation) => self.load_into(state, ANIMATION_LENS),
        }
    }

    fn accepts(&self, command: &RootCommand) -> bool { matches!(command, RootCommand::Persist(_)) }
}

/// Builds the composite reducer over the root state.
///
/// Domain reducers are pulled back along their lens and prism; the
/// persistence reducer handles [`RootCommand::Persist`] against `routes`.
#[must_use]
pub fn build_reducer(routes: &RoutingTable) -> Combine<RootState, RootCommand> {
    Combine::new()
        .with(
            "window-layout",
            Pullback::new(FnReducer(window_layout::reduce), WINDOW_LAYOUT_LENS, WINDOW_LAYOUT_PRISM),
        )
        .with("hotkey", Pullback::new(FnReducer(hotkey::reduce), HOTKEY_LENS, HOTKEY_PRISM))
        .with(
            "animation",
            Pullback::new(FnReducer(animation::reduce), ANIMATION_LENS, ANIMATION_PRISM),
        )
        .with("persist", PersistReducer::new(routes))
}
