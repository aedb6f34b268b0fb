use crate::config::{GeminiConfig, USER_AGENT};
use crate::error::ProviderError;
use crate::lesson::prompt::{build_lesson_prompt, extract_json_object};
use crate::lesson::types::{Lesson, TopicInfo};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

/// Produces lesson content for a topic.
#[async_trait]
pub trait LessonGenerator: Send + Sync {
    async fn generate(&self, info: &TopicInfo) -> Result<Lesson, ProviderError>;
}

pub struct GeminiLessonClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiLessonClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Looks up the configured model; fails when the key or model is rejected.
    pub async fn test_auth(&self) -> Result<(), ProviderError> {
        let url = self
            .config
            .base_url
            .join(&format!("models/{}", self.config.model))?;
        let resp = self
            .client
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let text = resp.text().await?;
        Err(ProviderError::Api {
            status,
            message: error_message(&text),
        })
    }
}

/// Provider error message from an error body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Concatenated text parts of the first candidate.
fn answer_text(value: &Value) -> Option<String> {
    let parts = value
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|c| c.get("content"))
        .and_then(|ct| ct.get("parts"))
        .and_then(|p| p.as_array())?;
    let text = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect::<Vec<_>>()
        .join("");
    (!text.is_empty()).then_some(text)
}

pub fn parse_lesson_answer(answer: &str) -> Result<Lesson, ProviderError> {
    let json_str = extract_json_object(answer)
        .ok_or_else(|| ProviderError::ParseError("model answer contains no JSON object".into()))?;
    Ok(serde_json::from_str(json_str)?)
}

#[async_trait]
impl LessonGenerator for GeminiLessonClient {
    async fn generate(&self, info: &TopicInfo) -> Result<Lesson, ProviderError> {
        if info.topic.trim().is_empty() {
            return Err(ProviderError::InvalidInput("topic is required".into()));
        }

        let url = self
            .config
            .base_url
            .join(&format!("models/{}:generateContent", self.config.model))?;
        debug!(endpoint = %url, topic = %info.topic, "Gemini generateContent request");

        let body = json!({
            "contents": [ { "parts": [ { "text": build_lesson_prompt(info) } ] } ]
        });

        let resp = self
            .client
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status,
                message: error_message(&text),
            });
        }
        let value: Value = serde_json::from_str(&text)?;

        let answer = answer_text(&value)
            .ok_or_else(|| ProviderError::ParseError("Gemini response has no candidate text".into()))?;
        parse_lesson_answer(&answer)
    }
}
