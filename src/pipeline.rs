//! Sentence transformation pipeline.
//!
//! A sentence is split into word and non-word tokens. Each word takes a detour
//! through language B and back to language A using one of three strategies;
//! non-word runs pass through untouched. The rebuilt sentence is then handed
//! to the optional composer.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::composer::{compose_or_passthrough, AnthropicComposer, Composer};
use crate::config::Config;
use crate::error::{HazeError, Result};
use crate::matcher::{find_nearest, NearestMatch};
use crate::translation::{simple_translate, FallbackTranslator, Translator};
use crate::wordlist::WordListProvider;

/// Chain placeholder for a hop that found no candidate.
const NO_MATCH: &str = "∅";

/// Per-word strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    /// B (fuzzy) then A (fuzzy)
    #[serde(rename = "fuzzy")]
    Fuzzy,
    /// B (fuzzy) then A (translate), no fallback
    #[serde(rename = "translate")]
    Translate,
    /// B (fuzzy) then A (translate), falling back to fuzzy
    #[serde(rename = "fuzzy_then_translate")]
    Hybrid,
}

/// Displays the name accepted by `FromStr` (`hybrid`), not the serialized label.
impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Fuzzy => "fuzzy",
            Method::Translate => "translate",
            Method::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

impl FromStr for Method {
    type Err = HazeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fuzzy" => Ok(Method::Fuzzy),
            "translate" => Ok(Method::Translate),
            "hybrid" | "fuzzy_then_translate" => Ok(Method::Hybrid),
            _ => Err(HazeError::UnknownMethod(s.to_string())),
        }
    }
}

/// How the second hop of a hybrid word was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HopMethod {
    Translate,
    FuzzyFallback,
}

impl fmt::Display for HopMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopMethod::Translate => f.write_str("translate"),
            HopMethod::FuzzyFallback => f.write_str("fuzzy_fallback"),
        }
    }
}

/// What happened to one word token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationRecord {
    pub original: String,
    pub transformed: String,
    /// Arrow-separated trace, e.g. `hello → hola → hill`.
    pub chain: String,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_used: Option<HopMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceResult {
    pub original_sentence: String,
    pub transformed_sentence: String,
    pub method: Method,
    pub language_route: String,
    pub word_transformations: Vec<TransformationRecord>,
    pub word_count: usize,
}

/// A piece of a tokenized sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Other(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Other(s) => s,
        }
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\w+)|(\W+)").expect("valid token regex"))
}

/// Split a sentence into maximal word runs and maximal non-word runs.
///
/// Concatenating the tokens in order reproduces the input exactly. A run is a
/// word when the `\w+` branch matched it, so runs that open with a combining
/// mark or a joiner still count as words.
pub fn tokenize(sentence: &str) -> Vec<Token<'_>> {
    token_pattern()
        .captures_iter(sentence)
        .filter_map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(word), _) => Some(Token::Word(word.as_str())),
            (None, Some(other)) => Some(Token::Other(other.as_str())),
            (None, None) => None,
        })
        .collect()
}

/// One fuzzy hop: the nearest candidate, or the input word carried forward.
fn hop(word: &str, vocabulary: &[String]) -> (String, Option<NearestMatch>) {
    match find_nearest(word, vocabulary, true) {
        Some(found) => (found.word.clone(), Some(found)),
        None => {
            debug!("No candidate for '{}'; keeping it", word);
            (word.to_string(), None)
        }
    }
}

fn chain_label(found: &Option<NearestMatch>) -> &str {
    found.as_ref().map_or(NO_MATCH, |m| m.word.as_str())
}

/// Phonetic transformation engine.
///
/// Owns the word-list provider (and with it the vocabulary cache) and the
/// collaborators. Cheap to share behind an `Arc`.
pub struct Hazer {
    provider: Arc<WordListProvider>,
    translator: Arc<dyn Translator>,
    composer: Option<Arc<dyn Composer>>,
}

impl Hazer {
    /// Engine without a composer.
    pub fn new(provider: Arc<WordListProvider>, translator: Arc<dyn Translator>) -> Self {
        Self {
            provider,
            translator,
            composer: None,
        }
    }

    pub fn with_composer(mut self, composer: Arc<dyn Composer>) -> Self {
        self.composer = Some(composer);
        self
    }

    /// Engine wired from configuration: registry word sources (or offline),
    /// translation service with dictionary fallback, and the Anthropic
    /// composer when an API key is set.
    pub fn from_config(config: &Config) -> Self {
        let provider = Arc::new(WordListProvider::from_config(config));
        let translator: Arc<dyn Translator> = Arc::new(FallbackTranslator::from_config(config));
        let hazer = Self::new(provider, translator);

        match AnthropicComposer::from_config(config) {
            Some(composer) => hazer.with_composer(Arc::new(composer)),
            None => {
                info!("No composer configured; sentences are returned uncomposed");
                hazer
            }
        }
    }

    pub fn provider(&self) -> &WordListProvider {
        &self.provider
    }

    /// Transform `sentence` word by word through `lang_b` and back to `lang_a`.
    ///
    /// Fails only with [`HazeError::UnsupportedLanguage`].
    pub async fn haze(
        &self,
        sentence: &str,
        lang_a: &str,
        lang_b: &str,
        method: Method,
    ) -> Result<SentenceResult> {
        let mut rebuilt = String::with_capacity(sentence.len());
        let mut records = Vec::new();

        for token in tokenize(sentence) {
            let word = match token {
                Token::Word(word) => word,
                Token::Other(text) => {
                    rebuilt.push_str(text);
                    continue;
                }
            };

            let record = match method {
                Method::Fuzzy => self.fuzzy_word(word, lang_a, lang_b).await?,
                Method::Translate => self.translate_word(word, lang_a, lang_b).await?,
                Method::Hybrid => self.hybrid_word(word, lang_a, lang_b).await?,
            };
            debug!("{}", record.chain);

            rebuilt.push_str(&record.transformed);
            records.push(record);
        }

        let transformed_sentence =
            compose_or_passthrough(self.composer.as_deref(), &rebuilt, lang_a).await;

        Ok(SentenceResult {
            original_sentence: sentence.to_string(),
            transformed_sentence,
            method,
            language_route: format!("{} → {} → {}", lang_a, lang_b, lang_a),
            word_count: records.len(),
            word_transformations: records,
        })
    }

    /// Sentence-level hazing with the hybrid strategy.
    pub async fn hybrid_haze(
        &self,
        sentence: &str,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<SentenceResult> {
        self.haze(sentence, lang_a, lang_b, Method::Hybrid).await
    }

    async fn fuzzy_word(
        &self,
        word: &str,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<TransformationRecord> {
        let vocabulary_a = self.provider.load(lang_a).await?;
        let vocabulary_b = self.provider.load(lang_b).await?;

        let (in_b, first) = hop(word, &vocabulary_b);
        let (in_a, second) = hop(&in_b, &vocabulary_a);

        Ok(TransformationRecord {
            original: word.to_string(),
            chain: format!(
                "{} → {} → {}",
                word,
                chain_label(&first),
                chain_label(&second)
            ),
            transformed: in_a,
            method: Method::Fuzzy,
            fallback_used: None,
        })
    }

    async fn translate_word(
        &self,
        word: &str,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<TransformationRecord> {
        let vocabulary_b = self.provider.load(lang_b).await?;

        let (in_b, first) = hop(word, &vocabulary_b);
        let translated = simple_translate(self.translator.as_ref(), &in_b, lang_b, lang_a).await;

        Ok(TransformationRecord {
            original: word.to_string(),
            chain: format!("{} → {} → {}", word, chain_label(&first), translated),
            transformed: translated,
            method: Method::Translate,
            fallback_used: None,
        })
    }

    async fn hybrid_word(
        &self,
        word: &str,
        lang_a: &str,
        lang_b: &str,
    ) -> Result<TransformationRecord> {
        let vocabulary_a = self.provider.load(lang_a).await?;
        let vocabulary_b = self.provider.load(lang_b).await?;

        let (in_b, first) = hop(word, &vocabulary_b);

        let translation = match self.translator.translate(&in_b, lang_b, lang_a).await {
            Ok(translated) if translated != in_b => Some(translated),
            Ok(_) => {
                debug!("Translation of '{}' echoed the input", in_b);
                None
            }
            Err(e) => {
                debug!("Translation of '{}' failed: {}", in_b, e);
                None
            }
        };

        let (transformed, hop_method) = match translation {
            Some(translated) => (translated, HopMethod::Translate),
            None => (hop(&in_b, &vocabulary_a).0, HopMethod::FuzzyFallback),
        };

        Ok(TransformationRecord {
            original: word.to_string(),
            chain: format!(
                "{} → {} → {} ({})",
                word,
                chain_label(&first),
                transformed,
                hop_method
            ),
            transformed,
            method: Method::Hybrid,
            fallback_used: Some(hop_method),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::{DictionaryTranslator, TranslateError};
    use crate::wordlist::WordSources;
    use async_trait::async_trait;
    use std::collections::HashMap;

    type TranslateResult = std::result::Result<String, TranslateError>;

    // ==================== Helper Functions ====================

    struct AlwaysFails;

    #[async_trait]
    impl Translator for AlwaysFails {
        async fn translate(&self, _: &str, _: &str, _: &str) -> TranslateResult {
            Err(TranslateError::Request("service unavailable".into()))
        }
    }

    struct Echo;

    #[async_trait]
    impl Translator for Echo {
        async fn translate(&self, word: &str, _: &str, _: &str) -> TranslateResult {
            Ok(word.to_string())
        }
    }

    struct Fixed(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl Translator for Fixed {
        async fn translate(&self, word: &str, _: &str, _: &str) -> TranslateResult {
            self.0
                .get(word)
                .map(|t| t.to_string())
                .ok_or_else(|| TranslateError::NoEntry(word.to_string()))
        }
    }

    fn offline_hazer(translator: Arc<dyn Translator>) -> Hazer {
        Hazer::new(Arc::new(WordListProvider::new(WordSources::offline())), translator)
    }

    // ==================== Tokenizer Tests ====================

    #[test]
    fn test_tokenize_splits_words_and_separators() {
        let tokens = tokenize("hello, world!");
        assert_eq!(
            tokens,
            vec![
                Token::Word("hello"),
                Token::Other(", "),
                Token::Word("world"),
                Token::Other("!"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unicode_words() {
        let tokens = tokenize("¿árbol niño?");
        assert_eq!(
            tokens,
            vec![
                Token::Other("¿"),
                Token::Word("árbol"),
                Token::Other(" "),
                Token::Word("niño"),
                Token::Other("?"),
            ]
        );
    }

    #[test]
    fn test_tokenize_words_starting_with_marks_or_joiners() {
        assert_eq!(
            tokenize("a \u{200d}bc"),
            vec![Token::Word("a"), Token::Other(" "), Token::Word("\u{200d}bc")]
        );
        assert_eq!(tokenize("\u{301}abc"), vec![Token::Word("\u{301}abc")]);
        assert_eq!(
            tokenize("x\u{203f}y, z"),
            vec![Token::Word("x\u{203f}y"), Token::Other(", "), Token::Word("z")]
        );
    }

    #[tokio::test]
    async fn test_word_count_includes_mark_led_words() {
        let result = offline_hazer(Arc::new(AlwaysFails))
            .haze("hello \u{301}world", "english", "spanish", Method::Fuzzy)
            .await
            .expect("supported");

        assert_eq!(result.word_count, 2);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_round_trip() {
        let sentence = "  Hello -- world...\tit's 42 degrees\n";
        let rebuilt: String = tokenize(sentence).iter().map(Token::as_str).collect();
        assert_eq!(rebuilt, sentence);
    }

    // ==================== Method Tests ====================

    #[test]
    fn test_method_from_str() {
        assert_eq!("fuzzy".parse::<Method>(), Ok(Method::Fuzzy));
        assert_eq!("Translate".parse::<Method>(), Ok(Method::Translate));
        assert_eq!("hybrid".parse::<Method>(), Ok(Method::Hybrid));
        assert_eq!("fuzzy_then_translate".parse::<Method>(), Ok(Method::Hybrid));
        assert_eq!(
            "nonfuzzy".parse::<Method>(),
            Err(HazeError::UnknownMethod("nonfuzzy".to_string()))
        );
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in [Method::Fuzzy, Method::Translate, Method::Hybrid] {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn test_method_serializes_as_label() {
        let json = serde_json::to_string(&Method::Hybrid).expect("serialize");
        assert_eq!(json, "\"fuzzy_then_translate\"");
        assert_eq!(Method::Hybrid.to_string(), "hybrid");
    }

    #[test]
    fn test_hop_method_serialization() {
        let json = serde_json::to_string(&HopMethod::FuzzyFallback).expect("serialize");
        assert_eq!(json, "\"fuzzy_fallback\"");
        assert_eq!(HopMethod::Translate.to_string(), "translate");
    }

    // ==================== Fuzzy Tests ====================

    #[tokio::test]
    async fn test_fuzzy_hello_world() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer
            .haze("hello world", "english", "spanish", Method::Fuzzy)
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "hill garden");
        assert_eq!(result.word_count, 2);
        assert_eq!(result.method, Method::Fuzzy);
        assert_eq!(result.language_route, "english → spanish → english");
        assert_eq!(result.word_transformations[0].chain, "hello → hola → hill");
        assert_eq!(result.word_transformations[1].chain, "world → gordo → garden");
        assert!(result.word_transformations[0].fallback_used.is_none());
    }

    #[tokio::test]
    async fn test_punctuation_passes_through() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer
            .haze("hello, world!", "english", "spanish", Method::Fuzzy)
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "hill, garden!");
    }

    #[tokio::test]
    async fn test_sentence_without_words() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer
            .haze(" ... ", "english", "spanish", Method::Fuzzy)
            .await
            .expect("no words to load for");

        assert_eq!(result.transformed_sentence, " ... ");
        assert_eq!(result.word_count, 0);
    }

    #[tokio::test]
    async fn test_unsupported_language_propagates() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer.haze("hello", "english", "klingon", Method::Fuzzy).await;

        assert!(matches!(
            result,
            Err(HazeError::UnsupportedLanguage { ref language, .. }) if language == "klingon"
        ));
    }

    // ==================== Translate Tests ====================

    #[tokio::test]
    async fn test_translate_keeps_marker_verbatim() {
        let hazer = offline_hazer(Arc::new(DictionaryTranslator));
        let result = hazer
            .haze("lluvia perro", "spanish", "french", Method::Translate)
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "libro [untranslated: papier]");
        assert_eq!(result.word_transformations[0].chain, "lluvia → livre → libro");
        assert_eq!(result.word_transformations[1].method, Method::Translate);
    }

    // ==================== Hybrid Tests ====================

    #[tokio::test]
    async fn test_hybrid_translates_then_falls_back() {
        let hazer = offline_hazer(Arc::new(DictionaryTranslator));
        let result = hazer
            .hybrid_haze("lluvia perro", "spanish", "french")
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "libro perro");
        assert_eq!(result.method, Method::Hybrid);

        let first = &result.word_transformations[0];
        assert_eq!(first.fallback_used, Some(HopMethod::Translate));
        assert_eq!(first.chain, "lluvia → livre → libro (translate)");

        let second = &result.word_transformations[1];
        assert_eq!(second.fallback_used, Some(HopMethod::FuzzyFallback));
        assert_eq!(second.chain, "perro → papier → perro (fuzzy_fallback)");
    }

    #[tokio::test]
    async fn test_hybrid_failing_translator_always_falls_back() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer
            .hybrid_haze("hello world the cat", "english", "spanish")
            .await
            .expect("supported languages");

        assert_eq!(result.word_count, 4);
        assert!(result
            .word_transformations
            .iter()
            .all(|r| r.fallback_used == Some(HopMethod::FuzzyFallback)));
        assert_eq!(result.transformed_sentence, "hill garden tea car");
    }

    #[tokio::test]
    async fn test_hybrid_echo_counts_as_failure() {
        let hazer = offline_hazer(Arc::new(Echo));
        let result = hazer
            .hybrid_haze("hello", "english", "spanish")
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "hill");
        assert_eq!(
            result.word_transformations[0].fallback_used,
            Some(HopMethod::FuzzyFallback)
        );
    }

    #[tokio::test]
    async fn test_hybrid_accepts_translation() {
        let translator = Fixed(HashMap::from([("hola", "hi")]));
        let hazer = offline_hazer(Arc::new(translator));
        let result = hazer
            .hybrid_haze("hello world", "english", "spanish")
            .await
            .expect("supported languages");

        assert_eq!(result.transformed_sentence, "hi garden");
        assert_eq!(result.word_transformations[0].chain, "hello → hola → hi (translate)");
    }

    #[tokio::test]
    async fn test_haze_with_hybrid_method_matches_hybrid_haze() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let via_haze = hazer
            .haze("hello world", "english", "spanish", Method::Hybrid)
            .await
            .expect("supported");
        let via_hybrid = hazer
            .hybrid_haze("hello world", "english", "spanish")
            .await
            .expect("supported");

        assert_eq!(via_haze, via_hybrid);
    }

    // ==================== No-Match Tests ====================

    #[test]
    fn test_hop_without_candidates_keeps_word() {
        let vocabulary = vec!["hello".to_string()];
        let (word, found) = hop("hello", &vocabulary);

        assert_eq!(word, "hello");
        assert!(found.is_none());
        assert_eq!(chain_label(&found), "∅");
    }

    #[tokio::test]
    async fn test_result_serializes_without_empty_fallback() {
        let hazer = offline_hazer(Arc::new(AlwaysFails));
        let result = hazer
            .haze("hello", "english", "spanish", Method::Fuzzy)
            .await
            .expect("supported");

        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["method"], "fuzzy");
        assert_eq!(json["word_count"], 1);
        assert!(json["word_transformations"][0].get("fallback_used").is_none());
    }

    // ==================== Config Wiring Tests ====================

    #[tokio::test]
    async fn test_from_config_offline_without_key_has_no_composer() {
        let config = Config {
            offline: true,
            ..Config::default()
        };
        let hazer = Hazer::from_config(&config);
        assert!(hazer.composer.is_none());

        let result = hazer
            .haze("hello world", "english", "spanish", Method::Fuzzy)
            .await
            .expect("embedded languages");
        assert_eq!(result.transformed_sentence, "hill garden");
        assert_eq!(hazer.provider().metrics().report().embedded_loads, 2);
        assert_eq!(hazer.provider().metrics().tier_failures(), 4);
    }

    #[test]
    fn test_from_config_with_key_installs_composer() {
        let config = Config {
            anthropic_api_key: Some("test-anthropic-key".to_string()),
            offline: true,
            ..Config::default()
        };
        let hazer = Hazer::from_config(&config);
        assert!(hazer.composer.is_some());
    }
}
