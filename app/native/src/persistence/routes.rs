//! File locations for each domain.

use std::path::{Path, PathBuf};

use crate::settings::Domain;

/// Snapshot file names, relative to the settings home.
pub const WINDOW_LAYOUT_SNAPSHOT: &str = "YabaiState.json";
pub const HOTKEY_SNAPSHOT: &str = "SKHDState.json";
pub const ANIMATION_SNAPSHOT: &str = "AnimationState.json";

/// Config script file names, relative to the settings home.
pub const WINDOW_LAYOUT_SCRIPT: &str = ".yabairc";
pub const HOTKEY_SCRIPT: &str = ".skhdrc";
pub const ANIMATION_SCRIPT: &str = ".animationSettingsRC.sh";

/// The two files belonging to one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// JSON snapshot of the domain state.
    pub snapshot_path: PathBuf,
    /// Script rendered for the external tool.
    pub config_path: PathBuf,
}

/// Maps each domain to its files under a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    home: PathBuf,
}

impl RoutingTable {
    /// Creates a routing table rooted at `home`.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self { Self { home: home.into() } }

    /// The settings home.
    #[must_use]
    pub fn home(&self) -> &Path { &self.home }

    /// Returns the files for `domain`.
    #[must_use]
    pub fn route(&self, domain: Domain) -> Route {
        let (snapshot, script) = match domain {
            Domain::WindowLayout => (WINDOW_LAYOUT_SNAPSHOT, WINDOW_LAYOUT_SCRIPT),
            Domain::Hotkey => (HOTKEY_SNAPSHOT, HOTKEY_SCRIPT),
            Domain::Animation => (ANIMATION_SNAPSHOT, ANIMATION_SCRIPT),
        };

        Route {
            snapshot_path: self.home.join(snapshot),
            config_path: self.home.join(script),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_routes_are_under_home() {
        let table = RoutingTable::new("/Users/me");
        let route = table.route(Domain::WindowLayout);
        assert_eq!(route.snapshot_path, PathBuf::from("/Users/me/YabaiState.json"));
        assert_eq!(route.config_path, PathBuf::from("/Users/me/.yabairc"));

        let route = table.route(Domain::Animation);
        assert_eq!(route.config_path, PathBuf::from("/Users/me/.animationSettingsRC.sh"));
    }

    #[test]
    fn test_every_path_is_distinct() {
        let table = RoutingTable::new("/home");
        let paths: HashSet<PathBuf> = Domain::ALL
            .into_iter()
            .flat_map(|d| {
                let route = table.route(d);
                [route.snapshot_path, route.config_path]
            })
            .collect();
        assert_eq!(paths.len(), Domain::ALL.len() * 2);
    }
}
