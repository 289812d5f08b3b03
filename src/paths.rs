//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory Specification conventions over
//! OS-specific locations, so the config lives in the same place on
//! macOS and Linux.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for polyglot.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/polyglot` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/polyglot` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("polyglot")),
        _ => Ok(home_dir()?.join(".config").join("polyglot")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
