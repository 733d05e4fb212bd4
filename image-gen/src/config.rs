//! Runtime configuration: credentials from the environment, the rest from flags

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "nano-banana-pro-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The site's static image folder, fixed at build time so runs from any directory land there
pub const DEFAULT_OUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../web-site/public/images");
/// Pause between jobs, keeps a full run under the free-tier rate limit
pub const DEFAULT_DELAY_MS: u64 = 2_000;

/// Checked in order; the first non-empty value wins
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY or API_KEY not found in environment variables")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub out_dir: PathBuf,
    pub delay: Duration,
}

impl Config {
    /// Defaults for everything except the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        api_key_from(|name| std::env::var(name).ok()).map(Self::with_api_key)
    }
}

/// Resolve the API key through `lookup`, treating empty values as unset
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn gemini_key_takes_precedence() {
        let key = api_key_from(env(&[("GEMINI_API_KEY", "g"), ("API_KEY", "a")]));
        assert_eq!(key, Ok("g".to_string()));
    }

    #[test]
    fn falls_back_to_api_key() {
        assert_eq!(api_key_from(env(&[("API_KEY", "a")])), Ok("a".to_string()));
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let key = api_key_from(env(&[("GEMINI_API_KEY", "  "), ("API_KEY", "a")]));
        assert_eq!(key, Ok("a".to_string()));
        assert_eq!(
            api_key_from(env(&[("GEMINI_API_KEY", "")])),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        assert_eq!(api_key_from(env(&[])), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn defaults() {
        let config = Config::with_api_key("k");
        assert_eq!(config.model, "nano-banana-pro-preview");
        assert_eq!(config.delay, Duration::from_secs(2));
        assert_eq!(config.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn default_out_dir_is_anchored_at_the_workspace() {
        let out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        assert!(out_dir.is_absolute());
        assert!(out_dir.ends_with("web-site/public/images"));
        assert!(out_dir.starts_with(env!("CARGO_MANIFEST_DIR")));
    }
}
