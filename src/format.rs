//! Catalog layouts for merged translations.
//!
//! Both layouts are plain text so they can be pasted straight into the
//! localization files; they are never colored.

use std::fmt::Write;

use crate::translation::MergedTranslations;

pub const CATEGORIES_HEADER: &str = "============ categories.txt format ============";
pub const STRINGS_HEADER: &str = "============ strings.txt format ============";

/// `code:text` per line, as used by `categories.txt`.
pub fn render_categories(merged: &MergedTranslations) -> String {
    let mut out = format!("{CATEGORIES_HEADER}\n");
    for (code, text) in merged.iter() {
        let _ = writeln!(out, "{code}:{text}");
    }
    out
}

/// `    code = text` per line, as used by `strings.txt`.
pub fn render_strings(merged: &MergedTranslations) -> String {
    let mut out = format!("{STRINGS_HEADER}\n");
    for (code, text) in merged.iter() {
        let _ = writeln!(out, "    {code} = {text}");
    }
    out
}

/// Prints both layouts to stdout.
pub fn print_catalogs(merged: &MergedTranslations) {
    print!("{}", render_categories(merged));
    print!("{}", render_strings(merged));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{Translations, merge};

    fn sample() -> MergedTranslations {
        let raw: Translations = [
            ("en", "Hello world"),
            ("zh-Hans", "你好世界"),
            ("de", "Hallo Welt"),
        ]
        .into_iter()
        .collect();
        merge(&raw, "en").unwrap()
    }

    #[test]
    fn test_render_categories() {
        assert_eq!(
            render_categories(&sample()),
            "============ categories.txt format ============\n\
             en:Hello world\n\
             de:Hallo Welt\n\
             zh-Hans:你好世界\n"
        );
    }

    #[test]
    fn test_render_strings() {
        assert_eq!(
            render_strings(&sample()),
            "============ strings.txt format ============\n    \
             en = Hello world\n    \
             de = Hallo Welt\n    \
             zh-Hans = 你好世界\n"
        );
    }
}
