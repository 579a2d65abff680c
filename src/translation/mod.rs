//! Best-effort word translation between two languages.
//!
//! Translators return a tagged result: `Ok(text)` or `Err(TranslateError)`.
//! The engine branches on that tag; [`simple_translate`] renders a failure
//! into the legacy `"[untranslated: <word>]"` marker for callers that want a
//! plain string.

pub mod dictionary;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::i18n::LanguageRegistry;

/// Why a translation attempt produced nothing usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(String),

    #[error("translation request timed out")]
    Timeout,

    #[error("translation service error ({0})")]
    Status(u16),

    #[error("failed to parse translation response: {0}")]
    Parse(String),

    #[error("translation service returned an empty response")]
    EmptyResponse,

    #[error("no translations available from {from} to {to}")]
    UnsupportedPair { from: String, to: String },

    #[error("no dictionary entry for '{0}'")]
    NoEntry(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Timeout
        } else {
            TranslateError::Request(e.to_string())
        }
    }
}

/// Translation collaborator.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn Translator>`. Languages are engine identifiers ("spanish").
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError>;
}

/// Failure marker carried over from the string-based contract.
pub fn untranslated_marker(word: &str) -> String {
    format!("[untranslated: {}]", word)
}

/// Translate `word`, rendering any failure as the untranslated marker.
pub async fn simple_translate(
    translator: &dyn Translator,
    word: &str,
    from: &str,
    to: &str,
) -> String {
    match translator.translate(word, from, to).await {
        Ok(translated) => translated,
        Err(e) => {
            debug!("Translation of '{}' ({} → {}) failed: {}", word, from, to, e);
            untranslated_marker(word)
        }
    }
}

/// Google Translate `translate_a/single` client (`client=gtx`).
///
/// Unknown source languages are sent as `auto`, unknown targets as `en`.
pub struct HttpTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTranslator {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.translate_api_url.clone(),
            Duration::from_secs(config.translate_timeout_secs),
        )
    }
}

/// Concatenate the translated segments of a `translate_a/single` response.
///
/// The response is a nested array: `[[["hola", "hello", ...], ...], ...]`.
fn parse_segments(body: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::Parse("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    let translated = translated.trim().to_string();
    if translated.is_empty() {
        return Err(TranslateError::EmptyResponse);
    }
    Ok(translated)
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let registry = LanguageRegistry::get();
        let source = registry.code_for(from).unwrap_or("auto");
        let target = registry.code_for(to).unwrap_or("en");

        let url = reqwest::Url::parse_with_params(
            &self.api_url,
            &[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", word),
            ],
        )
        .map_err(|e| TranslateError::Request(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        parse_segments(&body)
    }
}

/// Offline translator backed by the built-in bilingual dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DictionaryTranslator;

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let (from, to) = (from.to_lowercase(), to.to_lowercase());
        if !dictionary::has_pair(&from, &to) {
            return Err(TranslateError::UnsupportedPair { from, to });
        }

        dictionary::lookup(&word.to_lowercase(), &from, &to)
            .map(str::to_string)
            .ok_or_else(|| TranslateError::NoEntry(word.to_string()))
    }
}

/// Tries `primary`, then `secondary` when the primary fails.
pub struct FallbackTranslator<P: Translator, S: Translator> {
    primary: P,
    secondary: S,
}

impl<P: Translator, S: Translator> FallbackTranslator<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl FallbackTranslator<HttpTranslator, DictionaryTranslator> {
    /// Translation service first, built-in dictionary second.
    pub fn from_config(config: &Config) -> Self {
        Self::new(HttpTranslator::from_config(config), DictionaryTranslator)
    }
}

#[async_trait]
impl<P: Translator, S: Translator> Translator for FallbackTranslator<P, S> {
    async fn translate(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        match self.primary.translate(word, from, to).await {
            Ok(translated) => Ok(translated),
            Err(e) => {
                warn!(
                    "Translation service failed for '{}' ({} → {}): {}; trying dictionary",
                    word, from, to, e
                );
                self.secondary.translate(word, from, to).await
            }
        }
    }
}
