//! Iterated hazing until the text stops changing.
//!
//! Each iteration runs the hybrid pipeline on the previous output, applies
//! the language pair's cleanup rules and compares the result with its input.
//! The loop ends when that similarity reaches the threshold or the iteration
//! budget runs out.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::phonetic::sequence_ratio;
use crate::pipeline::{Hazer, TransformationRecord};

/// Ordered `(pattern, replacement)` rewrites applied to each iteration's output.
#[derive(Debug, Clone, Default)]
pub struct CleanupRules {
    rules: Vec<(Regex, &'static str)>,
}

/// Recurring english/spanish hop artifacts.
const ENGLISH_SPANISH_ARTIFACTS: &[(&str, &str)] = &[
    (r"\byao\b", "y"),
    (r"\bnoo\b", "no"),
    (r"\byou\b", "y"),
    (r"\bdee\b", "de"),
    (r"\baii\b", "ahí"),
    (r"\bmaui\b", "mi"),
    (r"\bai\b", "a"),
];

impl CleanupRules {
    /// No rewrites.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn english_spanish() -> Self {
        static RULES: OnceLock<CleanupRules> = OnceLock::new();
        RULES
            .get_or_init(|| CleanupRules {
                rules: ENGLISH_SPANISH_ARTIFACTS
                    .iter()
                    .map(|(pattern, replacement)| {
                        (Regex::new(pattern).expect("valid cleanup regex"), *replacement)
                    })
                    .collect(),
            })
            .clone()
    }

    /// Rules for a language pair, in either order. Only english/spanish has any.
    pub fn for_pair(lang_a: &str, lang_b: &str) -> Self {
        let mut pair = [lang_a.to_lowercase(), lang_b.to_lowercase()];
        pair.sort();
        match (pair[0].as_str(), pair[1].as_str()) {
            ("english", "spanish") => Self::english_spanish(),
            _ => Self::none(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (pattern, replacement)| {
                pattern.replace_all(&acc, *replacement).into_owned()
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RehazeParameters {
    pub max_iterations: usize,
    pub similarity_threshold: f64,
}

impl Default for RehazeParameters {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            similarity_threshold: 0.96,
        }
    }
}

impl RehazeParameters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_iterations: config.max_iterations,
            similarity_threshold: config.similarity_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    /// 1-based
    pub iteration: usize,
    pub input_text: String,
    pub output_text: String,
    /// Similarity between `input_text` and `output_text`; 0.0 on the first iteration.
    pub similarity_to_previous: f64,
    pub word_transformations: Vec<TransformationRecord>,
    pub transformation_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceResult {
    pub initial_text: String,
    /// Every iteration's output, newline-joined.
    pub final_text: String,
    pub final_iteration_text: String,
    pub iterations: Vec<IterationRecord>,
    pub total_iterations: usize,
    pub converged: bool,
    pub final_similarity: f64,
    pub language_route: String,
    pub parameters: RehazeParameters,
}

impl Hazer {
    /// Rehaze with the cleanup rules of the `lang_a`/`lang_b` pair.
    pub async fn rehaze(
        &self,
        initial_text: &str,
        lang_a: &str,
        lang_b: &str,
        max_iterations: usize,
        similarity_threshold: f64,
    ) -> Result<ConvergenceResult> {
        let parameters = RehazeParameters {
            max_iterations,
            similarity_threshold,
        };
        let cleanup = CleanupRules::for_pair(lang_a, lang_b);
        self.rehaze_with_cleanup(initial_text, lang_a, lang_b, parameters, &cleanup)
            .await
    }

    pub async fn rehaze_with_cleanup(
        &self,
        initial_text: &str,
        lang_a: &str,
        lang_b: &str,
        parameters: RehazeParameters,
        cleanup: &CleanupRules,
    ) -> Result<ConvergenceResult> {
        let mut iterations: Vec<IterationRecord> = Vec::new();
        let mut current = initial_text.to_string();

        for index in 0..parameters.max_iterations {
            let result = self.hybrid_haze(&current, lang_a, lang_b).await?;
            let output = cleanup.apply(&result.transformed_sentence);

            let similarity = if index == 0 {
                0.0
            } else {
                sequence_ratio(&current.to_lowercase(), &output.to_lowercase())
            };
            debug!(
                "Iteration {}: {:?} -> {:?} (similarity {:.3})",
                index + 1,
                current,
                output,
                similarity
            );

            iterations.push(IterationRecord {
                iteration: index + 1,
                input_text: current,
                output_text: output.clone(),
                similarity_to_previous: similarity,
                transformation_count: result.word_transformations.len(),
                word_transformations: result.word_transformations,
            });

            current = output;
            if similarity >= parameters.similarity_threshold {
                break;
            }
        }

        let total_iterations = iterations.len();
        let converged = total_iterations < parameters.max_iterations;
        let final_similarity = match iterations.last() {
            Some(last) if total_iterations > 1 => last.similarity_to_previous,
            _ => 0.0,
        };

        info!(
            "Rehaze {} ↔ {} finished after {} iterations (converged: {})",
            lang_a, lang_b, total_iterations, converged
        );

        Ok(ConvergenceResult {
            initial_text: initial_text.to_string(),
            final_text: iterations
                .iter()
                .map(|it| it.output_text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            final_iteration_text: current,
            total_iterations,
            converged,
            final_similarity,
            language_route: format!("{} ↔ {}", lang_a, lang_b),
            parameters,
            iterations,
        })
    }
}
