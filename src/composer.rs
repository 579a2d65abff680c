//! Optional LLM smoothing of a rebuilt sentence.
//!
//! The composer inserts connective words so a hazed token sequence reads as a
//! phrase in the target language. It is enrichment only: callers go through
//! [`compose_or_passthrough`], which never fails.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::i18n::LanguageRegistry;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Sentences with fewer whitespace tokens than this are returned as-is.
pub const MIN_COMPOSE_TOKENS: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("composer has no API key configured")]
    NotConfigured,

    #[error("composer request failed: {0}")]
    Request(String),

    #[error("composer request timed out")]
    Timeout,

    #[error("composer API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse composer response: {0}")]
    Parse(String),

    #[error("composer returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ComposeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ComposeError::Timeout
        } else {
            ComposeError::Request(e.to_string())
        }
    }
}

/// Text-composition collaborator.
#[async_trait]
pub trait Composer: Send + Sync {
    async fn compose(&self, text: &str, language: &str) -> Result<String, ComposeError>;
}

/// Compose `text` in `language`, falling back to the input on any failure.
///
/// Skipped when there is no composer or the text has fewer than
/// [`MIN_COMPOSE_TOKENS`] whitespace-delimited tokens.
pub async fn compose_or_passthrough(
    composer: Option<&dyn Composer>,
    text: &str,
    language: &str,
) -> String {
    let Some(composer) = composer else {
        return text.to_string();
    };

    if text.split_whitespace().count() < MIN_COMPOSE_TOKENS {
        debug!("Skipping composition for short text: {:?}", text);
        return text.to_string();
    }

    match composer.compose(text, language).await {
        Ok(composed) => composed,
        Err(e) => {
            warn!("Composition failed, keeping uncomposed text: {}", e);
            text.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Composer backed by the Anthropic Messages API.
pub struct AnthropicComposer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicComposer {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
            max_tokens: 50,
            temperature: 0.0,
        }
    }

    pub fn with_generation(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.anthropic_api_key.as_deref()?;
        let composer = Self::new(
            api_key,
            config.anthropic_api_url.clone(),
            config.anthropic_model.clone(),
            Duration::from_secs(config.composer_timeout_secs),
        )
        .with_generation(config.composer_max_tokens, config.composer_temperature);
        Some(composer)
    }
}

fn build_prompt(text: &str, language: &str) -> String {
    let language = LanguageRegistry::get().display_name(language);
    format!(
        "Build a MINIMALLY coherent phrase in {language} that contains ALL of the following \
         words in the exact order in which they appear: {text}\n\n\
         Only add the basic connectors and reordering needed to give the text narrative sense \
         in {language}. DO NOT ADD NOUNS. Reply with the resulting text only, without quotation \
         marks or any introduction. Always give the same result for the same input."
    )
}

#[async_trait]
impl Composer for AnthropicComposer {
    async fn compose(&self, text: &str, language: &str) -> Result<String, ComposeError> {
        if self.api_key.trim().is_empty() {
            return Err(ComposeError::NotConfigured);
        }

        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user".to_string(),
                content: build_prompt(text, language),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ComposeError::Status { status, body });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ComposeError::Parse(e.to_string()))?;

        let composed = parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if composed.is_empty() {
            return Err(ComposeError::EmptyResponse);
        }
        Ok(composed)
    }
}
