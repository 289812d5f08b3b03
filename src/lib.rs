//! # polyglot - Catalog Translation CLI
//!
//! `polyglot` translates one UI string into a fixed catalog of languages and
//! prints the result in two layouts ready to paste into localization files
//! (`categories.txt` and `strings.txt`).
//!
//! ## Backends
//!
//! - **google** (default): runs the `trans` program from translate-shell once
//!   for all target languages.
//! - **deepl**: calls the DeepL API once per target language.
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_FREE_API_KEY=...
//!
//! # English source (the default)
//! polyglot Some English text to translate
//!
//! # German source
//! polyglot de:Guten Morgen
//!
//! # Use DeepL instead of translate-shell
//! polyglot --backend deepl Hello world
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/polyglot/config.toml`:
//!
//! ```toml
//! [polyglot]
//! backend = "deepl"
//!
//! [deepl]
//! endpoint = "https://api.deepl.com/v2/translate"
//!
//! [trans]
//! command = "/usr/local/bin/trans"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and credential lookup.
pub mod config;

/// Rendering of merged translations into the catalog layouts.
pub mod format;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation backends, language tables and result merging.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
