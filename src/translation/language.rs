//! Target language catalogs and source-language parsing.

use super::{Backend, Engine};
use crate::ui::Style;

/// Source language used when the text carries no `xx:` prefix.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Regional codes dropped from the output when identical to their base language.
pub const REGIONAL_VARIANTS: &[&str] = &["en-GB", "es-MX", "pt-BR"];

/// A language a backend translates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    /// Code as understood by the backend.
    pub code: &'static str,
    /// English name, for listings.
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> TargetLanguage {
    TargetLanguage { code, name }
}

/// Google Translate targets.
///
/// The order is load-bearing: `trans` prints one line per target in this order.
/// See <https://cloud.google.com/translate/docs/languages>.
pub const GOOGLE_TARGET_LANGUAGES: &[TargetLanguage] = &[
    lang("ar", "Arabic"),
    lang("be", "Belarusian"),
    lang("ca", "Catalan"),
    lang("es-MX", "Spanish (Mexico)"),
    lang("eu", "Basque"),
    lang("fa", "Persian"),
    lang("he", "Hebrew"),
    lang("hi", "Hindi"),
    lang("mr", "Marathi"),
    lang("sw", "Swahili"),
    lang("th", "Thai"),
    lang("vi", "Vietnamese"),
    lang("zh-TW", "Chinese (Traditional)"),
    lang("af", "Afrikaans"),
    lang("bg", "Bulgarian"),
    lang("cs", "Czech"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("es", "Spanish"),
    lang("et", "Estonian"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("hr", "Croatian"),
    lang("hu", "Hungarian"),
    lang("id", "Indonesian"),
    lang("it", "Italian"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("lt", "Lithuanian"),
    lang("nb", "Norwegian Bokmål"),
    lang("nl", "Dutch"),
    lang("pl", "Polish"),
    lang("pt", "Portuguese"),
    lang("pt-BR", "Portuguese (Brazil)"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("sk", "Slovak"),
    lang("sv", "Swedish"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("zh", "Chinese (Simplified)"),
];

/// DeepL targets.
///
/// See <https://www.deepl.com/docs-api/translate-text/translate-text/>.
pub const DEEPL_TARGET_LANGUAGES: &[TargetLanguage] = &[
    lang("bg", "Bulgarian"),
    lang("cs", "Czech"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("en-GB", "English (British)"),
    lang("en-US", "English (American)"),
    lang("es", "Spanish"),
    lang("et", "Estonian"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("hu", "Hungarian"),
    lang("id", "Indonesian"),
    lang("it", "Italian"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("nb", "Norwegian Bokmål"),
    lang("nl", "Dutch"),
    lang("pl", "Polish"),
    lang("pt-BR", "Portuguese (Brazil)"),
    lang("pt-PT", "Portuguese (Portugal)"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("sk", "Slovak"),
    lang("sv", "Swedish"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("zh", "Chinese (Simplified)"),
];

/// Returns the language part of a code: `"pt"` for `"pt-BR"`.
pub fn base_code(code: &str) -> &str {
    code.split_once('-').map_or(code, |(base, _)| base)
}

/// Text to translate together with its source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Lower-cased two-letter code.
    pub language: String,
    pub text: String,
}

impl SourceText {
    /// Joins command-line words with single spaces and parses the result.
    pub fn from_args<S: AsRef<str>>(words: &[S]) -> Self {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::parse(&joined)
    }

    /// Splits an optional `xx:` source-language prefix off `input`.
    ///
    /// The prefix is only recognised when two ASCII letters and a colon are
    /// followed by at least one more character.
    pub fn parse(input: &str) -> Self {
        let bytes = input.as_bytes();
        if bytes.len() > 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1].is_ascii_alphabetic()
            && bytes[2] == b':'
        {
            return Self {
                language: input[..2].to_ascii_lowercase(),
                text: input[3..].trim_start().to_string(),
            };
        }

        Self {
            language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            text: input.to_string(),
        }
    }
}

/// Prints the target languages of every engine `backend` runs to stdout.
pub fn print_languages(backend: Backend) {
    for (index, engine) in backend.engines().iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_engine_languages(*engine);
    }
}

fn print_engine_languages(engine: Engine) {
    println!(
        "{}",
        Style::header(format!("{engine} target languages (catalog code, name)"))
    );
    for language in engine.target_languages() {
        println!("{}", language_line(engine, language));
    }
}

/// One listing row. The code column is padded before styling so columns
/// line up with colors on.
fn language_line(engine: Engine, language: &TargetLanguage) -> String {
    let display = engine.display_code(language.code);
    let requested_as = if display == language.code {
        String::new()
    } else {
        format!(" [requested as {}]", language.code)
    };
    format!(
        "  {} {}{}",
        Style::code(format!("{display:8}")),
        Style::secondary(language.name),
        Style::secondary(requested_as)
    )
}
