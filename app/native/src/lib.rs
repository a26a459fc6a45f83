//! Tessera - preference editor and config generator for yabai, skhd and
//! macOS animations.
//!
//! Settings live in three domains, each with its own state type and reducer
//! under [`settings`]. The [`store`] composes them into one root state,
//! saves a domain's JSON snapshot after every edit and reports the last
//! failed save, load or export. [`persistence`] maps domains to files and
//! turns state into the shell scripts the tools read at startup.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod platform;
pub mod schema;
pub mod settings;
pub mod store;
