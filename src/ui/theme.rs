//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "DeepL translations:")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |s| s.bold().to_string())
    }

    /// Style for secondary/supplementary info (e.g., language names)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |s| s.dimmed().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(text, |s| s.red().bold().to_string())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |s| s.yellow().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |s| s.yellow().to_string())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, |s| s.dimmed().italic().to_string())
    }
}

fn paint<T: Display>(text: T, styled: impl FnOnce(&str) -> String) -> String {
    let plain = text.to_string();
    if output::is_no_color() {
        plain
    } else {
        styled(&plain)
    }
}
