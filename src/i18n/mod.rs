//! Language metadata shared by the word-list, translation and composer layers.
//!
//! - `registry`: single source of truth for known languages, their ISO codes
//!   and their network word sources

mod registry;

pub use registry::{LanguageConfig, LanguageRegistry};
