//! Liang pattern hyphenation.
//!
//! A [`Registry`] owns one decoded pattern dictionary per language. Given a
//! language tag and a word it returns the offsets at which the word may be
//! hyphenated, or re-renders the word (or whole text) with a separator at
//! each of them.
//!
//! ```
//! let registry = hyfen::Registry::with_builtin_languages()?;
//! assert_eq!(registry.insert_hyphens("cs", "dokumentace", "-")?, "do-ku-men-ta-ce");
//! assert_eq!(registry.hyphenate("sv", "kärlek")?, vec![3]);
//! # Ok::<(), hyfen::HyphenError>(())
//! ```
//!
//! # Architecture
//!
//! - [`languages`] -- built-in tables and the [`Language`] type
//! - [`hyphenator`] -- the pattern-matching algorithm
//! - [`tokenizer`] -- text splitting for [`Registry::hyphenate_text`]
//! - [`registry`] -- the language-keyed entry point

pub mod hyphenator;
pub mod languages;
pub mod registry;
pub mod tokenizer;

pub use hyfen_patterns::{LanguageProfile, PackedTable, PatternDictionary, PatternError};
pub use hyphenator::{Hyphenator, HyphenatorOptions, LiangHyphenator};
pub use languages::Language;
pub use registry::Registry;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HyphenError {
    /// No language is registered for the requested tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A language's pattern table could not be decoded.
    #[error("malformed pattern table for {tag:?}: {source}")]
    MalformedPattern {
        tag: String,
        #[source]
        source: PatternError,
    },
}
