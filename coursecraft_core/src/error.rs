// src/error.rs
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    HttpRequest(reqwest::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else {
            ProviderError::HttpRequest(err)
        }
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::InvalidConfig(format!("invalid URL: {}", err))
    }
}

impl ProviderError {
    pub fn code_str(&self) -> &'static str {
        match self {
            ProviderError::SerdeJson(_) => "parse_error",
            ProviderError::ParseError(_) => "parse_error",
            ProviderError::HttpRequest(_) => "upstream_error",
            ProviderError::Api { status, .. } if *status == StatusCode::FORBIDDEN => "auth_failed",
            ProviderError::Api { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS => {
                "rate_limited"
            }
            ProviderError::Api { .. } => "upstream_error",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::MissingCredential(_) => "missing_credential",
            ProviderError::InvalidInput(_) => "invalid_input",
            ProviderError::InvalidConfig(_) => "invalid_config",
        }
    }
}
