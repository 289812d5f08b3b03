//! Merging of raw backend output into the catalog ordering.

use anyhow::{Result, bail};

use super::language::{REGIONAL_VARIANTS, base_code};
use super::mapping::{Translations, capitalize_first};

/// Translations ready for printing: source entry first, the rest sorted by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTranslations {
    source: (String, String),
    others: Vec<(String, String)>,
}

impl MergedTranslations {
    pub fn source_language(&self) -> &str {
        &self.source.0
    }

    pub fn source_text(&self) -> &str {
        &self.source.1
    }

    /// All entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(&self.source)
            .chain(&self.others)
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.iter().find(|(c, _)| *c == code).map(|(_, text)| text)
    }
}

/// Drops regional variants whose text matches their base language.
///
/// Texts are compared after first-letter capitalization, since the source
/// entry is stored as typed while translations are capitalized. A variant is
/// kept when its base language is missing.
pub fn dedupe_regional_variants(raw: &Translations) -> Translations {
    raw.iter()
        .filter(|(code, text)| !(REGIONAL_VARIANTS.contains(code) && matches_base(raw, code, text)))
        .collect()
}

fn matches_base(raw: &Translations, code: &str, text: &str) -> bool {
    raw.get(base_code(code))
        .is_some_and(|base| capitalize_first(base) == capitalize_first(text))
}

/// Deduplicates `raw` and orders it for output.
///
/// # Errors
///
/// Fails if `source_language` has no entry.
pub fn merge(raw: &Translations, source_language: &str) -> Result<MergedTranslations> {
    let deduped = dedupe_regional_variants(raw);

    let Some(source_text) = deduped.get(source_language).map(str::to_string) else {
        bail!(
            "source language '{source_language}' is missing from the translations; \
             this indicates a bug in the backend adapter"
        );
    };

    let mut others: Vec<(String, String)> = deduped
        .into_entries()
        .into_iter()
        .filter(|(code, _)| code != source_language)
        .collect();
    others.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(MergedTranslations {
        source: (source_language.to_string(), source_text),
        others,
    })
}
