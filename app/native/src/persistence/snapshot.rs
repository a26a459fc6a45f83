//! JSON snapshots of domain state.
//!
//! Snapshots are pretty-printed camelCase JSON. Reading is lenient about
//! shape (missing fields take their defaults, unknown fields are ignored) and
//! strict about types: a value of the wrong type fails the whole load.

use std::path::Path;

use super::routes::RoutingTable;
use crate::platform::{DATA_MODE, write_atomic};
use crate::settings::{Domain, Settings};
use crate::store::OperationError;

/// Reads and writes domain snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotCodec {
    routes: RoutingTable,
}

impl SnapshotCodec {
    #[must_use]
    pub const fn new(routes: RoutingTable) -> Self { Self { routes } }

    /// Returns true if a snapshot file exists for `domain`.
    #[must_use]
    pub fn exists(&self, domain: Domain) -> bool {
        self.routes.route(domain).snapshot_path.is_file()
    }

    /// Writes `state` to its domain's snapshot file.
    ///
    /// # Errors
    ///
    /// Returns a save error if the state cannot be serialized or written.
    pub fn save<S: Settings>(&self, state: &S) -> Result<(), OperationError> {
        let path = self.routes.route(S::DOMAIN).snapshot_path;

        let result = serde_json::to_string_pretty(state)
            .map_err(|err| OperationError::save(S::DOMAIN, err))
            .and_then(|json| {
                write_atomic(&path, json.as_bytes(), DATA_MODE)
                    .map_err(|err| OperationError::save(S::DOMAIN, describe(&path, &err)))
            });

        match &result {
            Ok(()) => tracing::info!(domain = %S::DOMAIN, path = %path.display(), "snapshot saved"),
            Err(err) => tracing::warn!(%err, "snapshot not saved"),
        }
        result
    }

    /// Reads the state stored in its domain's snapshot file.
    ///
    /// The loaded state is normalized the same way an edit is, so a
    /// hand-edited snapshot cannot carry out-of-range values or malformed
    /// keys into a generated script.
    ///
    /// # Errors
    ///
    /// Returns a load error if the file is missing, unreadable, not JSON, or
    /// holds a value of the wrong type for some field.
    pub fn load<S: Settings>(&self) -> Result<S, OperationError> {
        let path = self.routes.route(S::DOMAIN).snapshot_path;

        let result = std::fs::read_to_string(&path)
            .map_err(|err| OperationError::load(S::DOMAIN, describe(&path, &err)))
            .and_then(|json| {
                serde_json::from_str::<S>(&json)
                    .map(Settings::normalized)
                    .map_err(|err| OperationError::load(S::DOMAIN, describe(&path, &err)))
            });

        match &result {
            Ok(_) => tracing::info!(domain = %S::DOMAIN, path = %path.display(), "snapshot loaded"),
            Err(err) => tracing::warn!(%err, "snapshot not loaded"),
        }
        result
    }
}

fn describe(path: &Path, err: &dyn std::fmt::Display) -> String {
    format!("{}: {err}", path.display())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::settings::{AnimationState, HotkeyState, KeyScheme, WindowLayoutState};
    use crate::store::Operation;

    fn codec(dir: &TempDir) -> SnapshotCodec { SnapshotCodec::new(RoutingTable::new(dir.path())) }

    #[test]
    fn test_round_trip_every_domain() {
        let dir = TempDir::new().unwrap();
        let codec = codec(&dir);

        let layout = WindowLayoutState { window_gap: 8, ..Default::default() };
        let hotkey = HotkeyState { scheme: KeyScheme::Vim, ..Default::default() };
        let animation = AnimationState { all_enabled: false };

        codec.save(&layout).unwrap();
        codec.save(&hotkey).unwrap();
        codec.save(&animation).unwrap();

        assert_eq!(codec.load::<WindowLayoutState>().unwrap(), layout);
        assert_eq!(codec.load::<HotkeyState>().unwrap(), hotkey);
        assert_eq!(codec.load::<AnimationState>().unwrap(), animation);
    }

    #[test]
    fn test_snapshot_is_camel_case_json() {
        let dir = TempDir::new().unwrap();
        codec(&dir).save(&WindowLayoutState::default()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("YabaiState.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.get("windowGap").is_some());
        assert!(json.get("window_gap").is_none());
    }

    #[test]
    fn test_missing_snapshot_is_load_error() {
        let dir = TempDir::new().unwrap();
        let codec = codec(&dir);

        assert!(!codec.exists(Domain::Hotkey));
        let err = codec.load::<HotkeyState>().unwrap_err();
        assert_eq!(err.operation, Operation::Load);
        assert_eq!(err.domain, Domain::Hotkey);
    }

    #[test]
    fn test_type_mismatch_is_load_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("AnimationState.json"), r#"{"allEnabled": "yes"}"#).unwrap();

        let err = codec(&dir).load::<AnimationState>().unwrap_err();
        assert_eq!(err.domain, Domain::Animation);
        assert!(err.message.contains("AnimationState.json"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("AnimationState.json"),
            r#"{"allEnabled": false, "legacyFlag": 1}"#,
        )
        .unwrap();

        let state = codec(&dir).load::<AnimationState>().unwrap();
        assert!(!state.all_enabled);
    }

    #[test]
    fn test_save_onto_directory_is_save_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("SKHDState.json")).unwrap();

        let err = codec(&dir).save(&HotkeyState::default()).unwrap_err();
        assert_eq!(err.operation, Operation::Save);
        assert_eq!(err.domain, Domain::Hotkey);
    }

    #[test]
    fn test_loaded_snapshot_is_normalized() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("SKHDState.json"),
            r#"{"scheme": "custom", "customKeys": {"west": "h\nalt - q : rm -rf ~"}, "resizeStep": 0}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("YabaiState.json"), r#"{"splitRatio": 4.0}"#).unwrap();

        let codec = codec(&dir);
        let hotkey = codec.load::<HotkeyState>().unwrap();
        assert_eq!(hotkey.resize_step, 1);
        assert!(!hotkey.to_config_script().contains("rm -rf"));
        assert_eq!(hotkey.to_config_script().lines().count(), 12);

        let layout = codec.load::<WindowLayoutState>().unwrap();
        assert!((layout.split_ratio - 0.9).abs() < f64::EPSILON);
    }
}
