//! Cross-language phonetic hazing.
//!
//! A word is sent to its closest-sounding neighbour in another language and
//! brought back, either by sound again or by translation. Sentences are hazed
//! word by word; [`Hazer::rehaze`] repeats the process until the text settles.

pub mod composer;
pub mod config;
pub mod convergence;
pub mod error;
pub mod i18n;
pub mod matcher;
pub mod phonetic;
pub mod pipeline;
pub mod translation;
pub mod wordlist;

pub use convergence::{CleanupRules, ConvergenceResult, IterationRecord, RehazeParameters};
pub use error::{HazeError, Result};
pub use pipeline::{HopMethod, Hazer, Method, SentenceResult, TransformationRecord};
