//! Target language listing.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::translation::{Backend, print_languages};

/// Prints the targets of the backend selected by `backend` or the config file.
pub fn run_languages(backend: Option<Backend>) -> Result<()> {
    let file_config = ConfigManager::new()?.load_if_present()?;
    let config = resolve_config(&ResolveOptions { backend }, &file_config)?;

    print_languages(config.backend);
    Ok(())
}
