use thiserror::Error;

/// Errors that escape the hazing engine.
///
/// Every other failure (network tiers, translation, composition) is absorbed
/// inside the engine and shows up as degraded output instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HazeError {
    /// No word-list tier, including the embedded fallback, knows the language.
    #[error("Language '{language}' not supported. Available: {}", available.join(", "))]
    UnsupportedLanguage {
        language: String,
        available: Vec<String>,
    },

    /// A method name that is not one of `fuzzy`, `translate` or `hybrid`.
    #[error("Unknown haze method: '{0}'")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, HazeError>;
