//! Liang hyphenation pattern tables.
//!
//! This crate decodes the packed pattern-table format (letters interleaved
//! with weight digits, bucketed by chunk length) into an immutable
//! dictionary that the hyphenator queries by exact substring.
//!
//! # Architecture
//!
//! - [`format`] -- Packed table container and chunk decoding
//! - [`profile`] -- Per-language metadata (margins, pattern bounds, letters)
//! - [`dictionary`] -- Decoded pattern-to-weights mapping

pub mod dictionary;
pub mod format;
pub mod profile;

pub use dictionary::PatternDictionary;
pub use format::PackedTable;
pub use profile::LanguageProfile;

/// Error type for pattern table decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("malformed pattern {pattern:?}: {reason}")]
    Malformed {
        pattern: String,
        reason: &'static str,
    },
    #[error("bucket of {length}-character patterns has {actual} characters, not a multiple of {length}")]
    RaggedBucket { length: usize, actual: usize },
    #[error("bucket declares a pattern length of zero")]
    ZeroLengthBucket,
    #[error("invalid language profile: {0}")]
    InvalidProfile(String),
}

impl PatternError {
    pub(crate) fn malformed(pattern: &str, reason: &'static str) -> Self {
        PatternError::Malformed {
            pattern: pattern.to_string(),
            reason,
        }
    }
}
