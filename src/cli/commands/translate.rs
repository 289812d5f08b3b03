use anyhow::{Result, bail};

use crate::config::{
    ConfigManager, ResolveOptions, ResolvedConfig, resolve_api_key, resolve_config,
};
use crate::format::print_catalogs;
use crate::translation::{
    Backend, DeeplClient, Engine, SourceText, TransShell, Translations, merge,
};
use crate::ui::Style;
use crate::{output, progress};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub backend: Option<Backend>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let api_key = resolve_api_key()?;

    let source = SourceText::from_args(&options.text);
    if source.text.trim().is_empty() {
        bail!("nothing to translate");
    }

    let config = load_merged_config(&options)?;
    let engines = config.backend.engines();

    let trans = TransShell::new(config.trans_command.clone());
    if engines.contains(&Engine::Google) {
        trans.locate()?;
    }

    let mut raw = Translations::new();
    for engine in engines {
        let targets = engine.target_languages();
        let translations = match engine {
            Engine::Deepl => {
                DeeplClient::new(config.deepl.clone(), api_key.clone())?
                    .translate_all(&source.text, &source.language, targets)
                    .await?
            }
            Engine::Google => {
                trans
                    .translate_all(&source.text, &source.language, targets)
                    .await?
            }
        };
        raw.extend_missing(translations);
    }

    let merged = merge(&raw, &source.language)?;

    progress!(
        "\n{}",
        Style::header(format!("Merged {} translations:", config.backend))
    );
    print_catalogs(&merged);
    output::flush_stdout();

    Ok(())
}

fn load_merged_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_if_present()?;

    resolve_config(
        &ResolveOptions {
            backend: options.backend,
        },
        &file_config,
    )
}
