//! Atomic file writes.

use std::fs::Permissions;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Mode for files that are only read, such as snapshots.
pub const DATA_MODE: u32 = 0o644;

/// Mode for scripts the external tools execute.
pub const SCRIPT_MODE: u32 = 0o755;

/// Writes `contents` to `path` atomically.
///
/// The data goes to a temporary file in the same directory, is flushed to
/// disk, then renamed over `path`. Readers see either the previous file or
/// the complete new one. Missing parent directories are created.
///
/// A file that already exists keeps its permissions. A new file is created
/// with `mode` (Unix only), subject to the process umask.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the temporary
/// file cannot be written, or the rename fails (for example when `path` is an
/// existing directory).
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let existing = std::fs::metadata(path)
        .ok()
        .filter(std::fs::Metadata::is_file)
        .map(|metadata| metadata.permissions());

    let mut builder = Builder::new();
    builder.prefix(".tessera-");
    if let Some(permissions) = new_file_permissions(mode) {
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(parent)?;
    file.write_all(contents)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    Ok(())
}

#[cfg(unix)]
fn new_file_permissions(mode: u32) -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(mode))
}

#[cfg(not(unix))]
const fn new_file_permissions(_mode: u32) -> Option<Permissions> { None }

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("YabaiState.json");

        write_atomic(&path, b"{}", DATA_MODE).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skhdrc");

        write_atomic(&path, b"old", DATA_MODE).unwrap();
        write_atomic(&path, b"new", DATA_MODE).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "temporary file must not be left behind");
    }

    #[test]
    fn test_write_atomic_onto_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();

        assert!(write_atomic(&path, b"data", DATA_MODE).is_err());
        assert!(path.is_dir());
    }

    #[test]
    fn test_write_atomic_under_regular_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("home");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(write_atomic(&blocker.join("AnimationState.json"), b"{}", DATA_MODE).is_err());
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_new_script_is_executable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".yabairc");

        write_atomic(&path, b"yabai -m config layout bsp\n", SCRIPT_MODE).unwrap();

        let mode = mode_of(&path);
        assert_eq!(mode & 0o700, 0o700, "owner must be able to run the script, got {mode:o}");
        assert_eq!(mode & !SCRIPT_MODE, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_data_file_is_not_executable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("YabaiState.json");

        write_atomic(&path, b"{}", DATA_MODE).unwrap();

        let mode = mode_of(&path);
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o111, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_permissions_are_kept() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skhdrc");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o750)).unwrap();

        write_atomic(&path, b"new", DATA_MODE).unwrap();

        assert_eq!(mode_of(&path), 0o750);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
