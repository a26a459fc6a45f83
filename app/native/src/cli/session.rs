//! A store opened for one command line invocation.

use colored::Colorize;

use crate::config::TesseraConfig;
use crate::error::TesseraError;
use crate::persistence::RoutingTable;
use crate::platform::path::resolve_home;
use crate::store::{RootCommand, Store};

/// Owns the store for the duration of a command.
#[derive(Debug)]
pub struct Session {
    store: Store,
}

impl Session {
    /// Opens a store under the home from `--home`, else the config file, else
    /// the user's home directory, and loads existing snapshots if configured to.
    ///
    /// A snapshot that fails to load is reported on stderr; its domain keeps
    /// the defaults and the invocation carries on.
    #[must_use]
    pub fn open(home_override: Option<&str>, config: &TesseraConfig) -> Self {
        let home = resolve_home(home_override.or(config.home.as_deref()));
        tracing::debug!(home = %home.display(), "opening settings home");

        let mut store = Store::new(RoutingTable::new(home));
        if config.autoload {
            store.load_existing();
            if let Some(err) = store.last_error() {
                eprintln!("{} {err}", "warning:".yellow().bold());
            }
        }

        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &Store { &self.store }

    /// Dispatches `commands` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error left in the store's error slot by a failed save,
    /// load or export.
    pub fn apply<I>(&mut self, commands: I) -> Result<(), TesseraError>
    where
        I: IntoIterator,
        I::Item: Into<RootCommand>,
    {
        for command in commands {
            self.store.dispatch(command);
            if let Some(err) = self.store.last_error() {
                return Err(err.clone().into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::settings::{AnimationCommand, Domain, WindowLayoutCommand};

    fn config(dir: &TempDir) -> TesseraConfig {
        TesseraConfig {
            home: Some(dir.path().to_string_lossy().into_owned()),
            ..TesseraConfig::default()
        }
    }

    #[test]
    fn test_open_uses_configured_home() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(None, &config(&dir));
        assert_eq!(session.store().routes().home(), dir.path());
    }

    #[test]
    fn test_home_override_wins() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let home = other.path().to_string_lossy().into_owned();

        let session = Session::open(Some(&home), &config(&dir));
        assert_eq!(session.store().routes().home(), other.path());
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("YabaiState.json")).unwrap();
        let mut session = Session::open(None, &config(&dir));

        let result = session.apply([
            RootCommand::from(WindowLayoutCommand::SetWindowGap(3)),
            RootCommand::from(AnimationCommand::Toggle),
        ]);

        let Err(TesseraError::Operation(err)) = result else {
            panic!("expected an operation error");
        };
        assert_eq!(err.domain, Domain::WindowLayout);
        assert!(session.store().state().animation.all_enabled);
    }
}
