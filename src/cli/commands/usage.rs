//! Usage text shown when no text is given.

use crate::config::{ConfigManager, DEFAULT_TRANS_COMMAND};
use crate::translation::{find_executable, install_hint};
use crate::ui::Style;

/// Prints usage to stdout, plus an installation hint when `trans` is missing.
pub fn print_usage() {
    let program = "polyglot";
    println!("Usage: {program} Some English text to translate");
    println!("For a custom source language add a two-letter code with a colon in the beginning:");
    println!("       {program} de:Some German text to translate");
    println!();
    println!(
        "{}",
        Style::hint(format!(
            "Set DEEPL_FREE_API_KEY or DEEPL_API_KEY, and run '{program} --help' for options."
        ))
    );

    let command = configured_trans_command();
    if find_executable(&command).is_none() {
        println!();
        println!(
            "{} {command} program for Google Translate is not installed.",
            Style::warning("Warning:")
        );
        println!("{}", install_hint());
    }
}

fn configured_trans_command() -> String {
    ConfigManager::new()
        .and_then(|manager| manager.load_if_present())
        .ok()
        .and_then(|config| config.trans.command)
        .filter(|command| !command.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TRANS_COMMAND.to_string())
}
