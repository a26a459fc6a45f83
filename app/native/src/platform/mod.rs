//! Filesystem and path helpers.
//!
//! - [`fs`] - atomic file writes
//! - [`path`] - tilde expansion and home directory resolution

pub mod fs;
pub mod path;

pub use fs::{DATA_MODE, SCRIPT_MODE, write_atomic};
pub use path::{default_home, expand, expand_and_resolve, resolve_home};
