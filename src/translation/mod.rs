mod backend;
mod deepl;
mod language;
mod mapping;
mod merge;
mod trans;

pub use backend::{Backend, Engine};
pub use deepl::DeeplClient;
pub use language::{
    DEEPL_TARGET_LANGUAGES, DEFAULT_SOURCE_LANGUAGE, GOOGLE_TARGET_LANGUAGES, REGIONAL_VARIANTS,
    SourceText, TargetLanguage, base_code, print_languages,
};
pub use mapping::{Translations, capitalize_first};
pub use merge::{MergedTranslations, dedupe_regional_variants, merge};
pub use trans::{TransShell, find_executable, install_hint, language_spec, parse_output};
