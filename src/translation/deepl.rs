use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Engine;
use super::language::TargetLanguage;
use super::mapping::{Translations, capitalize_first};
use crate::config::{ApiKey, DeeplSettings};
use crate::progress;
use crate::ui::{Spinner, Style};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: &'a str,
    target_lang: &'a str,
    formality: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
}

/// Client for the DeepL `/v2/translate` endpoint.
pub struct DeeplClient {
    client: Client,
    endpoint: String,
    settings: DeeplSettings,
    api_key: ApiKey,
}

impl DeeplClient {
    pub fn new(settings: DeeplSettings, api_key: ApiKey) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        let endpoint = settings.endpoint_for(&api_key).to_string();

        Ok(Self {
            client,
            endpoint,
            settings,
            api_key,
        })
    }

    /// Translates `text` into a single target language.
    pub async fn translate_one(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let source_lang = source_language.to_lowercase();
        let body = TranslateRequest {
            text: [text],
            source_lang: &source_lang,
            target_lang: target_language,
            formality: &self.settings.formality,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key.expose()),
            )
            .json(&body)
            .send()
            .await
            .with_context(|| {
                format!("Failed to connect to DeepL endpoint: {}", self.endpoint)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("DeepL request failed with status {status}: {body}");
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse DeepL response")?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .context("DeepL response contained no translations")
    }

    /// Translates `text` into every target, one request at a time.
    ///
    /// The source text is stored under `source_language` as-is, and targets
    /// that map onto the source language are not requested.
    pub async fn translate_all(
        &self,
        text: &str,
        source_language: &str,
        targets: &[TargetLanguage],
    ) -> Result<Translations> {
        let mut translations = Translations::new();
        translations.insert(source_language, text);

        progress!("{}", Style::header("DeepL translations:"));
        let spinner = Spinner::new("Translating...");
        let total = targets.len();

        for (index, target) in targets.iter().enumerate() {
            let code = Engine::Deepl.display_code(target.code);
            if code == source_language {
                continue;
            }

            spinner.set_message(format!(
                "Translating into {} ({}/{total})...",
                target.code,
                index + 1
            ));
            let translated = self
                .translate_one(text, source_language, target.code)
                .await
                .with_context(|| format!("DeepL translation into '{}' failed", target.code))?;
            let translated = capitalize_first(&translated);

            spinner.suspend(|| progress!("{code} = {translated}"));
            translations.insert(code, translated);
        }

        spinner.stop();
        Ok(translations)
    }
}
