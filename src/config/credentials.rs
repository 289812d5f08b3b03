//! DeepL credential lookup.

use anyhow::{Result, bail};
use std::fmt;

/// Environment variables holding the DeepL key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["DEEPL_FREE_API_KEY", "DEEPL_API_KEY"];

/// A DeepL authentication key.
///
/// `Debug` is redacted so the key never ends up in logs or error chains.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Free-tier keys carry an `:fx` suffix.
    pub fn is_free(&self) -> bool {
        self.0.ends_with(":fx")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Reads the DeepL key from the process environment.
pub fn resolve_api_key() -> Result<ApiKey> {
    resolve_api_key_with(|name| std::env::var(name).ok())
}

/// Returns the first non-empty value among [`API_KEY_ENV_VARS`] as seen by `lookup`.
pub fn resolve_api_key_with<F>(lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
    {
        return Ok(ApiKey(key));
    }

    bail!(
        "neither {} nor {} environment variables are set.\n\n\
         DeepL translations are not available. Register for a free Developer API account here:\n  \
         https://www.deepl.com/pro#developer\n\
         and get the API key here:\n  \
         https://www.deepl.com/account/summary",
        API_KEY_ENV_VARS[0],
        API_KEY_ENV_VARS[1]
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_free_key_takes_priority() {
        let lookup = env_of(&[("DEEPL_FREE_API_KEY", "free"), ("DEEPL_API_KEY", "pro")]);
        assert_eq!(resolve_api_key_with(lookup).unwrap().expose(), "free");
    }

    #[test]
    fn test_falls_back_to_pro_key() {
        let lookup = env_of(&[("DEEPL_API_KEY", "pro")]);
        assert_eq!(resolve_api_key_with(lookup).unwrap().expose(), "pro");
    }

    #[test]
    fn test_empty_free_key_is_skipped() {
        let lookup = env_of(&[("DEEPL_FREE_API_KEY", ""), ("DEEPL_API_KEY", "pro")]);
        assert_eq!(resolve_api_key_with(lookup).unwrap().expose(), "pro");
    }

    #[test]
    fn test_missing_keys_is_an_error() {
        let err = resolve_api_key_with(env_of(&[])).unwrap_err().to_string();
        assert!(err.contains("DEEPL_FREE_API_KEY"));
        assert!(err.contains("DEEPL_API_KEY"));
        assert!(err.contains("https://www.deepl.com/pro#developer"));
    }

    #[test]
    fn test_free_key_suffix() {
        assert!(ApiKey::new("abc:fx").is_free());
        assert!(!ApiKey::new("abc").is_free());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("secret-key");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
