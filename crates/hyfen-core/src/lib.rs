//! Shared types for the hyfen hyphenation crates.
//!
//! - [`character`] -- character classification, case folding and the
//!   boundary markers used by pattern tables
//! - [`token`] -- text token types produced by the text tokenizer

pub mod character;
pub mod token;
