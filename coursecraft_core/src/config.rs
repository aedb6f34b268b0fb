//! Provider configuration.
//!
//! Clients never look at the process environment themselves; callers build a
//! [`YouTubeConfig`] or [`GeminiConfig`] and hand it over. [`resolve_auth`] is
//! the one place where stored credentials and environment variables meet.

use crate::auth::{AuthDetails, GEMINI_PROVIDER, YOUTUBE_PROVIDER};
use crate::auth_store::AuthStore;
use crate::error::ProviderError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("coursecraft/", env!("CARGO_PKG_VERSION"));

/// Environment variables consulted, in order, when a provider has no stored `api_key`.
pub fn api_key_env_vars(provider: &str) -> &'static [&'static str] {
    match provider {
        YOUTUBE_PROVIDER => &["YOUTUBE_API_KEY"],
        GEMINI_PROVIDER => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
        _ => &[],
    }
}

/// Stored details for `provider`, with `api_key` filled from the environment
/// when the store has none.
pub fn resolve_auth(store: &dyn AuthStore, provider: &str) -> AuthDetails {
    let mut auth = store.load(provider).unwrap_or_default();
    let has_key = auth.get("api_key").map(|k| !k.is_empty()).unwrap_or(false);
    if !has_key {
        if let Some(key) = api_key_env_vars(provider)
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        {
            auth.insert("api_key".into(), key);
        }
    }
    auth
}

fn parse_base_url(raw: &str) -> Result<Url, ProviderError> {
    // Url::join drops the last path segment unless it ends with '/'
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(Url::parse(&normalized)?)
}

fn required_key(auth: &AuthDetails, provider: &str) -> Result<String, ProviderError> {
    auth.get("api_key")
        .filter(|k| !k.is_empty())
        .cloned()
        .ok_or_else(|| ProviderError::MissingCredential(format!("{} api_key not set", provider)))
}

fn timeout_from(auth: &AuthDetails) -> Result<Duration, ProviderError> {
    match auth.get("timeout_secs") {
        None => Ok(DEFAULT_TIMEOUT),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                ProviderError::InvalidConfig(format!(
                    "timeout_secs must be a positive integer, got '{}'",
                    raw
                ))
            }),
    }
}

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl YouTubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Url::parse(DEFAULT_YOUTUBE_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ProviderError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_auth(auth: &AuthDetails) -> Result<Self, ProviderError> {
        let mut config = Self::new(required_key(auth, YOUTUBE_PROVIDER)?);
        if let Some(base) = auth.get("base_url") {
            config = config.with_base_url(base)?;
        }
        Ok(config.with_timeout(timeout_from(auth)?))
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Url,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: Url::parse(DEFAULT_GEMINI_BASE_URL).expect("default base URL is valid"),
            // Generation is slow compared to the video lookups.
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ProviderError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_auth(auth: &AuthDetails) -> Result<Self, ProviderError> {
        let mut config = Self::new(required_key(auth, GEMINI_PROVIDER)?);
        if let Some(model) = auth.get("model").filter(|m| !m.is_empty()) {
            config = config.with_model(model.clone());
        }
        if let Some(base) = auth.get("base_url") {
            config = config.with_base_url(base)?;
        }
        if auth.contains_key("timeout_secs") {
            config = config.with_timeout(timeout_from(auth)?);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_store::{AuthStore, MemoryAuthStore};

    fn auth(pairs: &[(&str, &str)]) -> AuthDetails {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn youtube_config_requires_api_key() {
        let err = YouTubeConfig::from_auth(&AuthDetails::new()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));

        let err = YouTubeConfig::from_auth(&auth(&[("api_key", "")])).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential(_)));
    }

    #[test]
    fn youtube_config_reads_overrides() {
        let config = YouTubeConfig::from_auth(&auth(&[
            ("api_key", "k"),
            ("base_url", "http://127.0.0.1:9000/yt"),
            ("timeout_secs", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/yt/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.base_url.join("search").unwrap().as_str(),
            "http://127.0.0.1:9000/yt/search"
        );
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = YouTubeConfig::from_auth(&auth(&[("api_key", "k"), ("timeout_secs", "0")]))
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig(_)));
    }

    #[test]
    fn gemini_config_defaults_model() {
        let config = GeminiConfig::from_auth(&auth(&[("api_key", "g")])).unwrap();
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        let config =
            GeminiConfig::from_auth(&auth(&[("api_key", "g"), ("model", "gemini-2.0-flash")]))
                .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn resolve_auth_prefers_stored_key() {
        let store = MemoryAuthStore::new();
        store
            .save(YOUTUBE_PROVIDER, &auth(&[("api_key", "stored")]))
            .unwrap();
        let resolved = resolve_auth(&store, YOUTUBE_PROVIDER);
        assert_eq!(resolved.get("api_key").unwrap(), "stored");
    }
}
