//! Configuration file management and credential lookup.

mod credentials;
mod manager;

pub use credentials::{API_KEY_ENV_VARS, ApiKey, resolve_api_key, resolve_api_key_with};
pub use manager::{
    ConfigFile, ConfigManager, DEEPL_FREE_ENDPOINT, DEEPL_PRO_ENDPOINT, DEFAULT_FORMALITY,
    DEFAULT_TRANS_COMMAND, DeeplConfig, DeeplSettings, PolyglotConfig, ResolveOptions,
    ResolvedConfig, TransConfig, resolve_config,
};
