//! Path expansion for user-supplied directories.
//!
//! The settings home comes from the command line or the config file and may
//! use `~`; everything downstream works with absolute paths.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Absolute and relative paths are returned unchanged. A blank input yields
/// an empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();
    if path.is_empty() {
        return PathBuf::new();
    }

    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Expands `path` and resolves it against `base_dir` if it is still relative.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let expanded = expand(path);
    if expanded.as_os_str().is_empty() || expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}

/// Returns the directory that holds snapshots and config scripts when none is
/// configured: the user's home directory, or the current directory if the
/// home directory cannot be determined.
#[must_use]
pub fn default_home() -> PathBuf { dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")) }

/// Resolves a configured home directory.
///
/// `None` or a blank string yields [`default_home`]. Relative paths are
/// resolved against the current working directory.
#[must_use]
pub fn resolve_home(configured: Option<&str>) -> PathBuf {
    match configured.map(str::trim) {
        Some(path) if !path.is_empty() => {
            let cwd = std::env::current_dir().unwrap_or_default();
            expand_and_resolve(path, &cwd)
        }
        _ => default_home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_blank() {
        assert_eq!(expand(""), PathBuf::new());
        assert_eq!(expand("   "), PathBuf::new());
    }

    #[test]
    fn test_expand_leaves_absolute_and_relative_paths() {
        assert_eq!(expand("/Users/me/.yabairc"), PathBuf::from("/Users/me/.yabairc"));
        assert_eq!(expand("dotfiles"), PathBuf::from("dotfiles"));
    }

    #[test]
    fn test_expand_tilde() {
        let result = expand("~/dotfiles");
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.to_string_lossy().ends_with("dotfiles"));
    }

    #[test]
    fn test_expand_and_resolve_relative() {
        let base = PathBuf::from("/Users/me");
        assert_eq!(
            expand_and_resolve(" dotfiles/yabai ", &base),
            PathBuf::from("/Users/me/dotfiles/yabai")
        );
    }

    #[test]
    fn test_expand_and_resolve_tilde_ignores_base() {
        let result = expand_and_resolve("~/dotfiles", Path::new("/base"));
        assert!(!result.to_string_lossy().starts_with("/base"));
    }

    #[test]
    fn test_resolve_home_blank_uses_default() {
        assert_eq!(resolve_home(None), default_home());
        assert_eq!(resolve_home(Some("  ")), default_home());
    }

    #[test]
    fn test_resolve_home_absolute() {
        assert_eq!(resolve_home(Some("/tmp/tessera")), PathBuf::from("/tmp/tessera"));
    }
}
