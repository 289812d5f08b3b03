use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::ApiKey;
use crate::paths;
use crate::translation::Backend;

/// DeepL translate endpoint for free-tier keys (those ending in `:fx`).
pub const DEEPL_FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// DeepL translate endpoint for pro keys.
pub const DEEPL_PRO_ENDPOINT: &str = "https://api.deepl.com/v2/translate";

/// Formality sent with every DeepL request unless overridden.
pub const DEFAULT_FORMALITY: &str = "prefer_less";

/// translate-shell executable name.
pub const DEFAULT_TRANS_COMMAND: &str = "trans";

const FORMALITIES: &[&str] = &["default", "more", "less", "prefer_more", "prefer_less"];

/// Default settings in the `[polyglot]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolyglotConfig {
    /// Default backend.
    pub backend: Option<Backend>,
}

/// The `[deepl]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeeplConfig {
    /// Translate endpoint URL. Chosen from the key type when absent.
    pub endpoint: Option<String>,
    /// DeepL `formality` parameter.
    pub formality: Option<String>,
    /// Per-request timeout. No timeout when absent.
    pub timeout_secs: Option<u64>,
}

/// The `[trans]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransConfig {
    /// Program name or path of the translate-shell executable.
    pub command: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/polyglot/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub polyglot: PolyglotConfig,
    #[serde(default)]
    pub deepl: DeeplConfig,
    #[serde(default)]
    pub trans: TransConfig,
}

/// DeepL settings after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeeplSettings {
    /// Configured endpoint, if any.
    pub endpoint: Option<String>,
    pub formality: String,
    pub timeout: Option<Duration>,
}

impl DeeplSettings {
    /// The configured endpoint, or the free/pro endpoint matching `api_key`.
    pub fn endpoint_for(&self, api_key: &ApiKey) -> &str {
        match &self.endpoint {
            Some(endpoint) => endpoint,
            None if api_key.is_free() => DEEPL_FREE_ENDPOINT,
            None => DEEPL_PRO_ENDPOINT,
        }
    }
}

impl Default for DeeplSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            formality: DEFAULT_FORMALITY.to_string(),
            timeout: None,
        }
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend: Backend,
    pub deepl: DeeplSettings,
    pub trans_command: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub backend: Option<Backend>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if a config file value is out of range.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let backend = options
        .backend
        .or(config_file.polyglot.backend)
        .unwrap_or_default();

    let endpoint = config_file.deepl.endpoint.clone();
    if let Some(endpoint) = endpoint
        .as_deref()
        .filter(|e| !e.starts_with("https://") && !e.starts_with("http://"))
    {
        bail!(
            "Invalid DeepL endpoint: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL, e.g. {DEEPL_PRO_ENDPOINT}"
        );
    }

    let formality = config_file
        .deepl
        .formality
        .clone()
        .unwrap_or_else(|| DEFAULT_FORMALITY.to_string());
    if !FORMALITIES.contains(&formality.as_str()) {
        bail!(
            "Invalid DeepL formality: '{formality}'\n\n\
             Valid values: {}",
            FORMALITIES.join(", ")
        );
    }

    let timeout = match config_file.deepl.timeout_secs {
        Some(0) => bail!("Invalid DeepL timeout_secs: must be greater than 0"),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    let trans_command = config_file
        .trans
        .command
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TRANS_COMMAND.to_string());

    Ok(ResolvedConfig {
        backend,
        deepl: DeeplSettings {
            endpoint,
            formality,
            timeout,
        },
        trans_command,
    })
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/polyglot/config.toml`
    /// or `~/.config/polyglot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_if_present(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
