//! Config script export.

use super::routes::RoutingTable;
use crate::platform::{SCRIPT_MODE, write_atomic};
use crate::settings::Settings;
use crate::store::OperationError;

/// Renders domain state into config scripts on disk.
#[derive(Debug, Clone)]
pub struct ConfigExporter {
    routes: RoutingTable,
}

impl ConfigExporter {
    #[must_use]
    pub const fn new(routes: RoutingTable) -> Self { Self { routes } }

    /// Writes the script for `state` to its domain's config path.
    ///
    /// New scripts are executable; an existing script keeps its permissions.
    ///
    /// The script depends only on `state`; exporting the same state twice
    /// produces byte-identical files.
    ///
    /// # Errors
    ///
    /// Returns an export error if the script cannot be written.
    pub fn export<S: Settings>(&self, state: &S) -> Result<(), OperationError> {
        let path = self.routes.route(S::DOMAIN).config_path;
        let script = state.to_config_script();

        match write_atomic(&path, script.as_bytes(), SCRIPT_MODE) {
            Ok(()) => {
                tracing::info!(domain = %S::DOMAIN, path = %path.display(), "config exported");
                Ok(())
            }
            Err(err) => {
                let err = OperationError::export(S::DOMAIN, format!("{}: {err}", path.display()));
                tracing::warn!(%err, "config not exported");
                Err(err)
            }
        }
    }
}
