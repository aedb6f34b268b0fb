pub mod config;
pub mod lesson;
pub mod video;

use crate::cli::Cli;
use coursecraft_core::auth::{GEMINI_PROVIDER, YOUTUBE_PROVIDER};
use coursecraft_core::auth_store::{AuthStore, FileAuthStore};
use coursecraft_core::config::{api_key_env_vars, resolve_auth};
use coursecraft_core::error::ProviderError;
use coursecraft_core::{GeminiConfig, YouTubeConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),

    #[error("No API key configured for {0}")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Lesson generation failed: {0}")]
    Generation(String),

    #[error("Core library error: {0}")]
    Core(#[from] ProviderError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CommandError {
    /// Message with a follow-up hint where one applies.
    pub fn format_error(&self) -> String {
        match self {
            CommandError::UnknownProvider(name) => format!(
                "Unknown provider '{}'. Known providers: {}, {}.",
                name, YOUTUBE_PROVIDER, GEMINI_PROVIDER
            ),
            CommandError::MissingCredential(provider) => {
                let vars = api_key_env_vars(provider).join(" or ");
                format!(
                    "No API key configured for {}. Run 'coursecraft config set {}' or set {}.",
                    provider, provider, vars
                )
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn timeout_override(timeout: Option<u64>) -> Result<Option<Duration>> {
    match timeout {
        Some(0) => Err(CommandError::InvalidConfig(
            "--timeout must be at least 1 second".into(),
        )),
        other => Ok(other.map(Duration::from_secs)),
    }
}

fn credential_error(provider: &str, err: ProviderError) -> CommandError {
    match err {
        ProviderError::MissingCredential(_) => CommandError::MissingCredential(provider.into()),
        other => CommandError::Core(other),
    }
}

pub fn youtube_config_from(store: &dyn AuthStore, timeout: Option<u64>) -> Result<YouTubeConfig> {
    let auth = resolve_auth(store, YOUTUBE_PROVIDER);
    let mut config =
        YouTubeConfig::from_auth(&auth).map_err(|e| credential_error(YOUTUBE_PROVIDER, e))?;
    if let Some(timeout) = timeout_override(timeout)? {
        config = config.with_timeout(timeout);
    }
    Ok(config)
}

pub fn gemini_config_from(store: &dyn AuthStore, timeout: Option<u64>) -> Result<GeminiConfig> {
    let auth = resolve_auth(store, GEMINI_PROVIDER);
    let mut config =
        GeminiConfig::from_auth(&auth).map_err(|e| credential_error(GEMINI_PROVIDER, e))?;
    if let Some(timeout) = timeout_override(timeout)? {
        config = config.with_timeout(timeout);
    }
    Ok(config)
}

pub fn youtube_config(cli: &Cli) -> Result<YouTubeConfig> {
    youtube_config_from(&FileAuthStore::new_default(), cli.timeout)
}

pub fn gemini_config(cli: &Cli) -> Result<GeminiConfig> {
    gemini_config_from(&FileAuthStore::new_default(), cli.timeout)
}
