use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Composer (Anthropic Messages API)
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_api_url: String,
    pub composer_max_tokens: u32,
    pub composer_temperature: f32,
    pub composer_timeout_secs: u64,

    // Translation service
    pub translate_api_url: String,
    pub translate_timeout_secs: u64,

    // Word lists
    pub frequency_timeout_secs: u64,
    pub wordlist_timeout_secs: u64,
    pub offline: bool,

    // Rehaze defaults
    pub max_iterations: usize,
    pub similarity_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            anthropic_model: "claude-sonnet-4-20250514".to_string(),
            anthropic_api_url: "https://api.anthropic.com/v1/messages".to_string(),
            composer_max_tokens: 50,
            composer_temperature: 0.0,
            composer_timeout_secs: 30,
            translate_api_url: "https://translate.googleapis.com/translate_a/single".to_string(),
            translate_timeout_secs: 10,
            frequency_timeout_secs: 10,
            wordlist_timeout_secs: 20,
            offline: false,
            max_iterations: 20,
            similarity_threshold: 0.96,
        }
    }
}

/// Parse an optional numeric variable, keeping the default when unset or invalid.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            // Composer - disabled when no key is set
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            anthropic_model: std::env::var("ANTHROPIC_MODEL").unwrap_or(defaults.anthropic_model),
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or(defaults.anthropic_api_url),
            composer_max_tokens: parse_var("COMPOSER_MAX_TOKENS", defaults.composer_max_tokens),
            composer_temperature: parse_var("COMPOSER_TEMPERATURE", defaults.composer_temperature),
            composer_timeout_secs: parse_var(
                "COMPOSER_TIMEOUT_SECS",
                defaults.composer_timeout_secs,
            ),

            // Translation
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or(defaults.translate_api_url),
            translate_timeout_secs: parse_var(
                "TRANSLATE_TIMEOUT_SECS",
                defaults.translate_timeout_secs,
            ),

            // Word lists
            frequency_timeout_secs: parse_var(
                "FREQUENCY_TIMEOUT_SECS",
                defaults.frequency_timeout_secs,
            ),
            wordlist_timeout_secs: parse_var(
                "WORDLIST_TIMEOUT_SECS",
                defaults.wordlist_timeout_secs,
            ),
            offline: parse_flag("HAZE_OFFLINE"),

            // Rehaze
            max_iterations: parse_var("REHAZE_MAX_ITERATIONS", defaults.max_iterations),
            similarity_threshold: parse_var(
                "REHAZE_SIMILARITY_THRESHOLD",
                defaults.similarity_threshold,
            ),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            bail!(
                "REHAZE_SIMILARITY_THRESHOLD must be between 0 and 1, got {}",
                self.similarity_threshold
            );
        }
        Ok(())
    }
}
