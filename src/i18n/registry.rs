//! Language registry: single source of truth for the languages the engine knows.
//!
//! The registry maps the lowercase language identifiers callers pass around
//! ("english", "spanish", ...) to ISO codes, display names and the network
//! word sources used by the first two word-list tiers. It uses a singleton
//! pattern with `OnceLock`, initialised on first access and immutable after.
//!
//! The registry does not validate engine input: an unknown language simply
//! has no network sources, and only the embedded tier decides whether it is
//! supported.

use std::sync::OnceLock;

/// Metadata for one known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Lowercase identifier used throughout the engine (e.g., "spanish")
    pub name: &'static str,

    /// ISO 639-1 code sent to the translation service (e.g., "es")
    pub code: &'static str,

    /// Human-readable name used in composer prompts (e.g., "Spanish")
    pub display_name: &'static str,

    /// Frequency-ranked word list (one entry per line, word first)
    pub frequency_url: Option<&'static str>,

    /// Larger unordered word list (one word per line)
    pub wordlist_url: Option<&'static str>,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its identifier, ignoring case.
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        let name = name.to_lowercase();
        self.languages.iter().find(|lang| lang.name == name)
    }

    /// Look up a language by its ISO 639-1 code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All known languages, in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// ISO code for `name`, if the language is known.
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.get_by_name(name).map(|lang| lang.code)
    }

    /// Display name for `name`, falling back to the identifier itself.
    pub fn display_name(&self, name: &str) -> String {
        self.get_by_name(name)
            .map(|lang| lang.display_name.to_string())
            .unwrap_or_else(|| name.to_string())
    }
}

/// Default language configurations.
///
/// Dutch has a frequency list but no general word list and no embedded
/// vocabulary.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            name: "english",
            code: "en",
            display_name: "English",
            frequency_url: Some(
                "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-no-swears.txt",
            ),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt",
            ),
        },
        LanguageConfig {
            name: "spanish",
            code: "es",
            display_name: "Spanish",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/es/es_50k.txt"
            )),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/MangoTheCat/spanish-words/master/spanish-words.txt",
            ),
        },
        LanguageConfig {
            name: "french",
            code: "fr",
            display_name: "French",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/fr/fr_50k.txt"
            )),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/chrplr/openlexicon/master/datasets-info/Liste-de-mots-francais-Gutenberg/liste_de_mots_francais.txt",
            ),
        },
        LanguageConfig {
            name: "german",
            code: "de",
            display_name: "German",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/de/de_50k.txt"
            )),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/davidak/wortliste/master/wortliste.txt",
            ),
        },
        LanguageConfig {
            name: "italian",
            code: "it",
            display_name: "Italian",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/it/it_50k.txt"
            )),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/napolux/paroleitaliane/master/paroleitaliane/280000_parole_italiane.txt",
            ),
        },
        LanguageConfig {
            name: "portuguese",
            code: "pt",
            display_name: "Portuguese",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/pt/pt_50k.txt"
            )),
            wordlist_url: Some(
                "https://raw.githubusercontent.com/pythonprobr/palavras/master/palavras.txt",
            ),
        },
        LanguageConfig {
            name: "dutch",
            code: "nl",
            display_name: "Dutch",
            frequency_url: Some(concat!(
                "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016",
                "/nl/nl_50k.txt"
            )),
            wordlist_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERMITDAVE: &str =
        "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016";

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_name_spanish() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_name("spanish").expect("spanish is known");

        assert_eq!(config.code, "es");
        assert_eq!(config.display_name, "Spanish");
        assert!(config.frequency_url.is_some());
        assert!(config.wordlist_url.is_some());
    }

    #[test]
    fn test_get_by_name_ignores_case() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.code_for("German"), Some("de"));
        assert_eq!(registry.code_for("ITALIAN"), Some("it"));
    }

    #[test]
    fn test_get_by_name_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_name("klingon").is_none());
    }

    #[test]
    fn test_get_by_code_portuguese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("pt").expect("pt is known");
        assert_eq!(config.name, "portuguese");
    }

    #[test]
    fn test_dutch_has_frequency_list_only() {
        let registry = LanguageRegistry::get();
        let dutch = registry.get_by_name("dutch").expect("dutch is known");

        assert!(dutch.frequency_url.is_some());
        assert!(dutch.wordlist_url.is_none());
    }

    #[test]
    fn test_list_all_has_seven_languages() {
        let registry = LanguageRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), 7);
        assert!(all.iter().any(|lang| lang.code == "en"));
        assert!(all.iter().any(|lang| lang.code == "nl"));
    }

    #[test]
    fn test_frequency_urls_share_hermitdave_prefix() {
        let registry = LanguageRegistry::get();
        for name in ["spanish", "french", "german", "italian", "portuguese", "dutch"] {
            let url = registry
                .get_by_name(name)
                .and_then(|lang| lang.frequency_url)
                .expect("frequency url");
            assert!(url.starts_with(HERMITDAVE), "{} -> {}", name, url);
        }
    }

    #[test]
    fn test_display_name_falls_back_to_identifier() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.display_name("french"), "French");
        assert_eq!(registry.display_name("klingon"), "klingon");
    }
}
