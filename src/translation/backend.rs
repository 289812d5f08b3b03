use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

use super::language::{DEEPL_TARGET_LANGUAGES, GOOGLE_TARGET_LANGUAGES, TargetLanguage};

/// Backend codes rewritten to the codes used in the catalog files.
const DEEPL_DISPLAY_CODES: &[(&str, &str)] = &[("pt-PT", "pt"), ("zh", "zh-Hans"), ("en-US", "en")];
const GOOGLE_DISPLAY_CODES: &[(&str, &str)] = &[("zh-TW", "zh-Hant"), ("zh", "zh-Hans")];

/// A single translation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Google Translate through the translate-shell `trans` program.
    Google,
    /// The DeepL REST API.
    Deepl,
}

impl Engine {
    /// Languages this engine is asked to translate into, in request order.
    pub const fn target_languages(self) -> &'static [TargetLanguage] {
        match self {
            Self::Google => GOOGLE_TARGET_LANGUAGES,
            Self::Deepl => DEEPL_TARGET_LANGUAGES,
        }
    }

    /// Maps an engine language code to the code used in the catalog files.
    pub fn display_code(self, code: &str) -> &str {
        let table = match self {
            Self::Google => GOOGLE_DISPLAY_CODES,
            Self::Deepl => DEEPL_DISPLAY_CODES,
        };
        table
            .iter()
            .find(|(raw, _)| *raw == code)
            .map_or(code, |&(_, display)| display)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Deepl => "DeepL",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which engines a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Google Translate only.
    #[default]
    Google,
    /// DeepL only.
    Deepl,
    /// DeepL where it covers a language, Google Translate for the rest.
    Combined,
}

impl Backend {
    /// Engines to run, in order. Earlier engines win on shared languages.
    pub const fn engines(self) -> &'static [Engine] {
        match self {
            Self::Google => &[Engine::Google],
            Self::Deepl => &[Engine::Deepl],
            Self::Combined => &[Engine::Deepl, Engine::Google],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Deepl => "DeepL",
            Self::Combined => "DeepL and Google",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
