//! Vocabulary acquisition through a tiered fallback chain.
//!
//! For each language the provider tries, in order:
//!
//! 1. a frequency-ranked word list over HTTP (first token per line),
//! 2. a larger general word list over HTTP (one word per line),
//! 3. the embedded vocabularies bundled with the crate.
//!
//! Network tiers never raise: each yields `Result<Vec<String>, TierFailure>`
//! and a failure (including an empty result) falls through to the next tier.
//! Only the embedded tier can fail the load, with
//! [`HazeError::UnsupportedLanguage`].
//!
//! Resolved vocabularies are cached per language for the provider's lifetime.
//! Concurrent first loads of the same language share one resolution.

mod embedded;
mod metrics;

pub use embedded::{embedded_vocabulary, EMBEDDED_LANGUAGES};
pub use metrics::{LoadMetrics, LoadReport};

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{HazeError, Result};
use crate::i18n::LanguageRegistry;

/// Ordered vocabulary for one language. Cheap to clone; repeated loads of a
/// cached language hand out the same allocation.
pub type Vocabulary = Arc<Vec<String>>;

const MAX_WORD_LEN: usize = 25;

/// Stage of the word-list resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Frequency,
    Wordlist,
    Embedded,
}

/// Why a network tier produced no vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TierFailure {
    #[error("no source configured for this language")]
    NoSource,

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),

    #[error("source answered with HTTP {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("source contained no usable words")]
    Empty,
}

impl From<reqwest::Error> for TierFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TierFailure::Timeout
        } else {
            TierFailure::Request(e.to_string())
        }
    }
}

/// Network locations and timeouts for the first two tiers.
#[derive(Debug, Clone)]
pub struct WordSources {
    frequency: HashMap<String, String>,
    wordlist: HashMap<String, String>,
    frequency_timeout: Duration,
    wordlist_timeout: Duration,
}

impl WordSources {
    /// Sources from the language registry, with the default 10s / 20s timeouts.
    pub fn from_registry() -> Self {
        let mut sources = Self::offline();
        for lang in LanguageRegistry::get().list_all() {
            if let Some(url) = lang.frequency_url {
                sources.frequency.insert(lang.name.to_string(), url.to_string());
            }
            if let Some(url) = lang.wordlist_url {
                sources.wordlist.insert(lang.name.to_string(), url.to_string());
            }
        }
        sources
    }

    /// No network sources: every load is answered by the embedded tier.
    pub fn offline() -> Self {
        Self {
            frequency: HashMap::new(),
            wordlist: HashMap::new(),
            frequency_timeout: Duration::from_secs(10),
            wordlist_timeout: Duration::from_secs(20),
        }
    }

    pub fn with_frequency_url(mut self, language: &str, url: impl Into<String>) -> Self {
        self.frequency.insert(language.to_lowercase(), url.into());
        self
    }

    pub fn with_wordlist_url(mut self, language: &str, url: impl Into<String>) -> Self {
        self.wordlist.insert(language.to_lowercase(), url.into());
        self
    }

    pub fn with_timeouts(mut self, frequency: Duration, wordlist: Duration) -> Self {
        self.frequency_timeout = frequency;
        self.wordlist_timeout = wordlist;
        self
    }

    fn source_for(&self, tier: Tier, language: &str) -> Option<(&str, Duration)> {
        match tier {
            Tier::Frequency => self
                .frequency
                .get(language)
                .map(|url| (url.as_str(), self.frequency_timeout)),
            Tier::Wordlist => self
                .wordlist
                .get(language)
                .map(|url| (url.as_str(), self.wordlist_timeout)),
            Tier::Embedded => None,
        }
    }
}

impl Default for WordSources {
    fn default() -> Self {
        Self::from_registry()
    }
}

/// Resolves and caches vocabularies per language.
pub struct WordListProvider {
    client: reqwest::Client,
    sources: WordSources,
    cache: Mutex<HashMap<String, Arc<OnceCell<Vocabulary>>>>,
    metrics: LoadMetrics,
}

impl WordListProvider {
    pub fn new(sources: WordSources) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("haze/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client, sources)
    }

    pub fn with_client(client: reqwest::Client, sources: WordSources) -> Self {
        Self {
            client,
            sources,
            cache: Mutex::new(HashMap::new()),
            metrics: LoadMetrics::default(),
        }
    }

    /// Provider configured from [`Config`]: registry sources with the
    /// configured timeouts, or no network sources when offline.
    pub fn from_config(config: &Config) -> Self {
        let sources = if config.offline {
            WordSources::offline()
        } else {
            WordSources::from_registry()
        };
        Self::new(sources.with_timeouts(
            Duration::from_secs(config.frequency_timeout_secs),
            Duration::from_secs(config.wordlist_timeout_secs),
        ))
    }

    pub fn metrics(&self) -> &LoadMetrics {
        &self.metrics
    }

    /// Vocabulary for `language`, resolving it through the tiers on first use.
    pub async fn load(&self, language: &str) -> Result<Vocabulary> {
        let key = language.to_lowercase();
        let cell = self.cell_for(&key);

        let mut resolved_here = false;
        let resolved = cell
            .get_or_try_init(|| {
                resolved_here = true;
                self.resolve(&key)
            })
            .await;
        let vocabulary = match resolved {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                self.evict_unresolved(&key, &cell);
                return Err(e);
            }
        };

        if !resolved_here {
            self.metrics.record_cache_hit();
        }
        Ok(Arc::clone(vocabulary))
    }

    /// Languages with a cached vocabulary.
    pub fn cached_languages(&self) -> Vec<String> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let mut languages: Vec<String> = cache
            .iter()
            .filter(|(_, cell)| cell.initialized())
            .map(|(language, _)| language.clone())
            .collect();
        languages.sort();
        languages
    }

    fn cell_for(&self, key: &str) -> Arc<OnceCell<Vocabulary>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(key.to_string()).or_default())
    }

    /// Drop an empty cell so failed languages do not accumulate in the cache.
    fn evict_unresolved(&self, key: &str, cell: &Arc<OnceCell<Vocabulary>>) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let is_same_empty_cell = cache
            .get(key)
            .is_some_and(|cached| Arc::ptr_eq(cached, cell) && !cached.initialized());
        if is_same_empty_cell {
            cache.remove(key);
        }
    }

    async fn resolve(&self, language: &str) -> Result<Vocabulary> {
        for tier in [Tier::Frequency, Tier::Wordlist] {
            match self.fetch_tier(tier, language).await {
                Ok(words) => {
                    info!("Loaded {} {} words from the {:?} tier", words.len(), language, tier);
                    self.metrics.record_resolution(tier);
                    return Ok(Arc::new(words));
                }
                Err(TierFailure::NoSource) => {
                    debug!("No {:?} source for {}", tier, language);
                    self.metrics.record_tier_failure();
                }
                Err(failure) => {
                    warn!("{:?} tier failed for {}: {}", tier, language, failure);
                    self.metrics.record_tier_failure();
                }
            }
        }

        match embedded_vocabulary(language) {
            Some(words) => {
                info!("Using embedded vocabulary for {} ({} words)", language, words.len());
                self.metrics.record_resolution(Tier::Embedded);
                Ok(Arc::new(words.iter().map(|w| w.to_string()).collect()))
            }
            None => Err(HazeError::UnsupportedLanguage {
                language: language.to_string(),
                available: EMBEDDED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            }),
        }
    }

    async fn fetch_tier(
        &self,
        tier: Tier,
        language: &str,
    ) -> std::result::Result<Vec<String>, TierFailure> {
        let (url, timeout) = self
            .sources
            .source_for(tier, language)
            .ok_or(TierFailure::NoSource)?;

        let response = self.client.get(url).timeout(timeout).send().await?;
        if !response.status().is_success() {
            return Err(TierFailure::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TierFailure::Timeout
            } else {
                TierFailure::Body(e.to_string())
            }
        })?;

        let words = match tier {
            Tier::Frequency => parse_frequency_list(&body),
            _ => parse_wordlist(&body),
        };

        if words.is_empty() {
            return Err(TierFailure::Empty);
        }
        Ok(words)
    }
}

impl Default for WordListProvider {
    fn default() -> Self {
        Self::new(WordSources::default())
    }
}

fn is_acceptable_word(word: &str) -> bool {
    let len = word.chars().count();
    (1..=MAX_WORD_LEN).contains(&len) && word.chars().all(char::is_alphabetic)
}

/// Frequency list: first whitespace-delimited token of each line.
fn parse_frequency_list(body: &str) -> Vec<String> {
    body.trim()
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_lowercase)
        .filter(|word| is_acceptable_word(word))
        .collect()
}

/// General word list: one word per line.
fn parse_wordlist(body: &str) -> Vec<String> {
    body.trim()
        .lines()
        .map(str::trim)
        .filter(|word| is_acceptable_word(word))
        .map(str::to_lowercase)
        .collect()
}
